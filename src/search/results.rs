use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Document with relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub relevance_score: i64,
}

impl SearchResult {
    pub fn new(doc_id: DocId, relevance_score: i64) -> Self {
        SearchResult { doc_id, relevance_score }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.relevance_score, self.doc_id)
    }
}

/// Stable descending sort by score; equal scores keep their relative order.
pub fn sort_by_score(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
}
