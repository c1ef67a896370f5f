use letopis::analysis::token::Token;
use letopis::core::error::ErrorKind;
use letopis::core::types::DocId;
use letopis::index::inverted::InvertedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tokens(words: &[&str]) -> Vec<Token> {
    words.iter().enumerate().map(|(i, w)| Token::new(*w, i * 8)).collect()
}

fn sample_index() -> InvertedIndex {
    let mut index = InvertedIndex::with_capacity(32);
    index.add_document(DocId::from("https://example.org/rome"), &tokens(&["рим", "войн", "рим"]));
    index.add_document(DocId::from("https://example.org/carthage"), &tokens(&["карфаген", "войн"]));
    index.add_document(DocId::from("https://example.org/empty"), &[]);
    index
}

#[test]
fn save_then_load_reproduces_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inverted_index.bin");

    let saved = sample_index();
    saved.save_to_file(&path).unwrap();

    let loaded = InvertedIndex::open(&path).unwrap();
    assert_eq!(loaded.documents(), saved.documents());
    assert_eq!(loaded.total_documents(), 3);
    assert_eq!(loaded.vocabulary_size(), saved.vocabulary_size());

    for (term, list) in saved.postings() {
        let restored = loaded.get_posting_list(term).unwrap();
        assert_eq!(restored, list, "posting list for {term}");
    }
}

#[test]
fn load_merges_terms_and_replaces_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.bin");
    sample_index().save_to_file(&path).unwrap();

    let mut index = InvertedIndex::with_capacity(32);
    index.add_document(DocId::from("local"), &tokens(&["рим", "локальн"]));
    index.load_from_file(&path).unwrap();

    // Documents come from the file only
    assert_eq!(index.total_documents(), 3);
    assert!(!index.documents().contains(&DocId::from("local")));

    // Terms in the file overwrite, terms only in memory survive
    let rome = index.get_posting_list("рим").unwrap();
    assert_eq!(rome.doc_ids, vec![DocId::from("https://example.org/rome")]);
    assert_eq!(rome.term_frequencies, vec![2]);
    assert!(index.get_posting_list("локальн").is_some());
}

#[test]
fn truncated_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.bin");
    sample_index().save_to_file(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();

    let err = InvertedIndex::open(&path).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CorruptIndex);
}

#[test]
fn large_random_vocabulary_survives_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.bin");
    let mut rng = StdRng::seed_from_u64(7);

    let mut index = InvertedIndex::with_capacity(16);
    for doc in 0..200 {
        let words: Vec<String> = (0..50)
            .map(|_| format!("t{}", rng.gen_range(0..3000)))
            .collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        index.add_document(DocId::new(format!("doc{doc}")), &tokens(&refs));
    }
    index.save_to_file(&path).unwrap();

    let loaded = InvertedIndex::open(&path).unwrap();
    assert_eq!(loaded.vocabulary_size(), index.vocabulary_size());
    for (term, list) in index.postings() {
        assert_eq!(loaded.get_posting_list(term), Some(list));
    }
}
