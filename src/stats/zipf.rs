use std::path::Path;
use csv::WriterBuilder;
use serde::Serialize;
use crate::core::error::Result;
use crate::index::probe_table::ProbeTable;

const CSV_HEADER: [&str; 6] = [
    "rank", "term", "frequency", "zipf_prediction", "log_rank", "log_frequency",
];

#[derive(Debug, Serialize)]
struct ZipfRow<'a> {
    rank: usize,
    term: &'a str,
    frequency: i64,
    zipf_prediction: f64,
    log_rank: f64,
    log_frequency: f64,
}

/// Corpus-wide term counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZipfSummary {
    pub total_terms: i64,
    pub unique_terms: usize,
    pub vocabulary_richness: f64,   // Percent of unique terms
}

/// Term frequency collector for rank/frequency analysis
pub struct ZipfAnalyzer {
    term_counts: ProbeTable<i64>,
    total_terms: i64,
}

impl ZipfAnalyzer {
    pub fn new() -> Self {
        Self::with_capacity(crate::index::probe_table::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ZipfAnalyzer {
            term_counts: ProbeTable::with_capacity(capacity),
            total_terms: 0,
        }
    }

    pub fn add_term(&mut self, term: &str) {
        match self.term_counts.get_mut(term) {
            Some(count) => *count += 1,
            None => self.term_counts.insert(term, 1),
        }
        self.total_terms += 1;
    }

    pub fn frequency(&self, term: &str) -> i64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Terms by descending frequency. Ties keep table order.
    pub fn ranked(&self) -> Vec<(&str, i64)> {
        let mut ranked: Vec<(&str, i64)> = self.term_counts.iter()
            .map(|(term, &count)| (term, count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Write at most `limit` ranked rows, with the ideal Zipf curve
    /// `max_freq / rank` alongside the observed counts.
    pub fn save_to_csv(&self, path: &Path, limit: usize) -> Result<()> {
        let ranked = self.ranked();
        let max_freq = ranked.first().map(|&(_, freq)| freq).unwrap_or(1);

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(CSV_HEADER)?;

        for (i, &(term, frequency)) in ranked.iter().take(limit).enumerate() {
            let rank = i + 1;
            writer.serialize(ZipfRow {
                rank,
                term,
                frequency,
                zipf_prediction: max_freq as f64 / rank as f64,
                log_rank: (rank as f64).log10(),
                log_frequency: (frequency as f64).log10(),
            })?;
        }
        writer.flush()?;

        log::info!("Zipf analysis saved to: {}", path.display());
        Ok(())
    }

    pub fn summary(&self) -> ZipfSummary {
        let unique_terms = self.term_counts.len();
        let vocabulary_richness = if self.total_terms == 0 {
            0.0
        } else {
            100.0 * unique_terms as f64 / self.total_terms as f64
        };

        ZipfSummary {
            total_terms: self.total_terms,
            unique_terms,
            vocabulary_richness,
        }
    }

    pub fn total_terms(&self) -> i64 {
        self.total_terms
    }

    pub fn unique_terms(&self) -> usize {
        self.term_counts.len()
    }
}

impl Default for ZipfAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(terms: &[&str]) -> ZipfAnalyzer {
        let mut zipf = ZipfAnalyzer::with_capacity(64);
        for term in terms {
            zipf.add_term(term);
        }
        zipf
    }

    #[test]
    fn counts_and_ranks() {
        let zipf = analyzer(&["war", "peace", "war", "rome", "war", "peace"]);

        assert_eq!(zipf.frequency("war"), 3);
        assert_eq!(zipf.frequency("absent"), 0);
        assert_eq!(zipf.ranked(), vec![("war", 3), ("peace", 2), ("rome", 1)]);
    }

    #[test]
    fn summary_richness() {
        let summary = analyzer(&["a", "b", "a", "a"]).summary();
        assert_eq!(summary.total_terms, 4);
        assert_eq!(summary.unique_terms, 2);
        assert_eq!(summary.vocabulary_richness, 50.0);

        let empty = ZipfAnalyzer::with_capacity(8).summary();
        assert_eq!(empty.vocabulary_richness, 0.0);
    }

    #[test]
    fn csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf.csv");
        analyzer(&["война", "мир", "война", "война", "мир", "рим"])
            .save_to_csv(&path, 2)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "rank,term,frequency,zipf_prediction,log_rank,log_frequency");

        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(&first[..3], &["1", "война", "3"]);
        assert_eq!(first[3].parse::<f64>().unwrap(), 3.0);
        assert_eq!(first[4].parse::<f64>().unwrap(), 0.0);

        let second: Vec<&str> = lines[2].split(',').collect();
        assert_eq!(&second[..3], &["2", "мир", "2"]);
        assert_eq!(second[3].parse::<f64>().unwrap(), 1.5);
        assert!((second[4].parse::<f64>().unwrap() - 2f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn empty_csv_has_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf.csv");
        ZipfAnalyzer::with_capacity(8).save_to_csv(&path, 10).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
