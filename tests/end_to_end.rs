use std::fs;
use letopis::core::config::Config;
use letopis::core::engine::SearchEngine;
use letopis::ingest::jsonl::JsonlSource;

const DOCUMENTS: &str = concat!(
    r#"{"url":"https://history.example/punic","html_content":"<h1>Пунические войны</h1><p>Рим против Карфагена</p>","source":"wiki"}"#, "\n",
    r#"{"url":"https://history.example/napoleon","html_content":"<p>Война 1812 года&nbsp;и Россия</p><script>var war = 1;</script>","source":"wiki"}"#, "\n",
    "\n",
    r#"{"url":"https://history.example/rome","html_content":"<p>Рим, Рим и снова Рим</p>"}"#, "\n",
    "{broken\n",
);

fn indexed_engine(dir: &std::path::Path) -> SearchEngine {
    let docs_path = dir.join("documents.jsonl");
    fs::write(&docs_path, DOCUMENTS).unwrap();

    let config = Config::default().with_storage_path(dir.join("output"));
    let mut engine = SearchEngine::new(config);
    let report = engine.index_source(&mut JsonlSource::new(&docs_path)).unwrap();
    assert_eq!(report.indexed_documents, 3);
    engine
}

fn urls(results: &[letopis::search::results::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.doc_id.as_str()).collect()
}

#[test]
fn boolean_queries_over_indexed_pages() {
    let dir = tempfile::tempdir().unwrap();
    let engine = indexed_engine(dir.path());
    let search = engine.searcher();

    assert_eq!(
        urls(&search.search("рим")),
        vec!["https://history.example/punic", "https://history.example/rome"]
    );
    assert_eq!(urls(&search.search("рим NOT карфагена")), vec!["https://history.example/rome"]);
    assert_eq!(
        urls(&search.search("войны OR россия")),
        vec!["https://history.example/napoleon", "https://history.example/punic"]
    );
    // Script bodies are not indexed
    assert!(search.search("war").is_empty());
}

#[test]
fn ranking_prefers_repeated_terms() {
    let dir = tempfile::tempdir().unwrap();
    let engine = indexed_engine(dir.path());

    let ranked = engine.searcher().search_with_ranking("рим");
    assert_eq!(ranked[0].doc_id.as_str(), "https://history.example/rome");
    assert_eq!(ranked[0].relevance_score, 3);
    assert_eq!(ranked[1].relevance_score, 1);
}

#[test]
fn saved_outputs_can_be_reopened() {
    let dir = tempfile::tempdir().unwrap();
    let engine = indexed_engine(dir.path());
    let layout = engine.save().unwrap();

    let csv = fs::read_to_string(layout.zipf_path()).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("rank,term,frequency,zipf_prediction,log_rank,log_frequency"));
    // "рим" loses its adjectival "им" ending, and every other stem is rarer
    assert!(lines.next().unwrap().starts_with("1,р,4,"));

    let reopened = SearchEngine::open(Config::default(), layout.index_path()).unwrap();
    assert_eq!(reopened.index().documents(), engine.index().documents());
    assert_eq!(
        urls(&reopened.searcher().search("рим")),
        urls(&engine.searcher().search("рим"))
    );
}
