use std::path::Path;
use std::time::Instant;
use chrono::Utc;
use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexingReport;
use crate::index::inverted::InvertedIndex;
use crate::ingest::document::{DocumentSource, RawDocument};
use crate::ingest::html::strip_and_decode;
use crate::search::executor::BooleanSearch;
use crate::stats::zipf::ZipfAnalyzer;
use crate::storage::layout::StorageLayout;

/// Batch indexing pipeline: strip, analyze, count, index
pub struct SearchEngine {
    config: Config,
    analyzer: Analyzer,
    index: InvertedIndex,
    zipf: ZipfAnalyzer,
}

impl SearchEngine {
    pub fn new(config: Config) -> Self {
        let analyzer = Analyzer::russian();
        log::debug!("analyzer {}", analyzer.describe());

        SearchEngine {
            analyzer,
            index: InvertedIndex::with_capacity(config.table_capacity),
            zipf: ZipfAnalyzer::with_capacity(config.table_capacity),
            config,
        }
    }

    /// Engine over a previously saved index, ready for searching.
    pub fn open(config: Config, index_path: &Path) -> Result<Self> {
        let mut engine = SearchEngine::new(config);
        engine.index.load_from_file(index_path)?;
        Ok(engine)
    }

    pub fn index_source(&mut self, source: &mut dyn DocumentSource) -> Result<IndexingReport> {
        let documents = source.documents()?;
        Ok(self.index_documents(&documents))
    }

    pub fn index_documents(&mut self, documents: &[RawDocument]) -> IndexingReport {
        let started_at = Utc::now();
        let start = Instant::now();
        let total = documents.len();
        let interval = self.config.progress_interval.max(1);

        log::info!("Processing {} documents...", total);
        for (i, doc) in documents.iter().enumerate() {
            self.index_document(doc);

            if (i + 1) % interval == 0 {
                log::info!("Processed {}/{} documents", i + 1, total);
            }
        }

        let report = IndexingReport {
            started_at,
            elapsed: start.elapsed(),
            indexed_documents: total,
            vocabulary_size: self.index.vocabulary_size(),
            tokenizer: self.analyzer.tokenizer_stats(),
            zipf: self.zipf.summary(),
        };
        log::info!(
            "Indexed {} documents in {:.3}s ({:.1} docs/s), vocabulary size {}",
            report.indexed_documents, report.elapsed_secs(), report.docs_per_second(),
            report.vocabulary_size
        );
        report
    }

    pub fn index_document(&mut self, doc: &RawDocument) {
        let text = strip_and_decode(&doc.html_content);
        let tokens = self.analyzer.analyze(&text);

        for token in &tokens {
            self.zipf.add_term(&token.text);
        }
        self.index.add_document(doc.doc_id(), &tokens);
    }

    /// Write the index and the Zipf CSV under the configured output directory.
    pub fn save(&self) -> Result<StorageLayout> {
        let layout = StorageLayout::new(&self.config)?;
        self.index.save_to_file(layout.index_path())?;
        self.zipf.save_to_csv(layout.zipf_path(), self.config.zipf_limit)?;
        Ok(layout)
    }

    pub fn searcher(&self) -> BooleanSearch<'_> {
        BooleanSearch::new(&self.index)
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn zipf(&self) -> &ZipfAnalyzer {
        &self.zipf
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(dir: &Path) -> Config {
        let mut config = Config::default().with_storage_path(dir);
        config.table_capacity = 64;
        config
    }

    #[test]
    fn indexes_stripped_and_stemmed_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = SearchEngine::new(small_config(dir.path()));

        let report = engine.index_documents(&[
            RawDocument::new("u1", "<p>Книги&nbsp;и войны</p><script>книги</script>"),
            RawDocument::new("u2", "<b>книга</b>"),
        ]);

        assert_eq!(report.indexed_documents, 2);
        assert_eq!(report.tokenizer.total_tokens, 4);
        assert_eq!(report.zipf.total_terms, 4);

        let list = engine.index().get_posting_list("книг").unwrap();
        assert_eq!(list.frequency_of(&"u1".into()), Some(1));
        assert_eq!(list.frequency_of(&"u2".into()), Some(1));
        assert_eq!(engine.zipf().frequency("книг"), 2);

        let hits = engine.searcher().search("книги AND войны");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].doc_id.as_str(), "u1");
    }

    #[test]
    fn save_writes_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = SearchEngine::new(small_config(&dir.path().join("out")));
        engine.index_documents(&[RawDocument::new("u", "Рим и Карфаген")]);

        let layout = engine.save().unwrap();
        assert!(layout.index_path().is_file());
        assert!(layout.zipf_path().is_file());

        let reopened = SearchEngine::open(small_config(dir.path()), layout.index_path()).unwrap();
        assert_eq!(reopened.index().total_documents(), 1);
        assert_eq!(reopened.searcher().search("рим").len(), 1);
    }
}
