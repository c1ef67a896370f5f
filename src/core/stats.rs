use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::analysis::tokenizer::TokenizerStats;
use crate::stats::zipf::ZipfSummary;

/// Outcome of one indexing run
#[derive(Debug, Clone, Serialize)]
pub struct IndexingReport {
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,

    pub indexed_documents: usize,
    pub vocabulary_size: usize,
    pub tokenizer: TokenizerStats,
    pub zipf: ZipfSummary,
}

impl IndexingReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn docs_per_second(&self) -> f64 {
        let secs = self.elapsed_secs();
        if secs > 0.0 {
            self.indexed_documents as f64 / secs
        } else {
            0.0
        }
    }
}

/// Summary of a persisted index, as reported by `letopis stats`
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub vocabulary_size: usize,
    pub total_postings: usize,
    pub index_size_bytes: u64,
}
