use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use crate::analysis::token::Token;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::index::posting::PostingList;
use crate::index::probe_table::{ProbeTable, DEFAULT_CAPACITY};
use crate::storage::index_file::{read_index, write_index};

// Per-document term counts; grows on demand.
const DOC_TERMS_CAPACITY: usize = 256;

/// Inverted index structure
///
/// Maps each term to the documents containing it, with in-document counts.
/// Terms are stored exactly as given: callers stem before adding or looking up.
#[derive(Debug)]
pub struct InvertedIndex {
    postings: ProbeTable<PostingList>,
    documents: Vec<DocId>,
    total_docs: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        InvertedIndex {
            postings: ProbeTable::with_capacity(capacity),
            documents: Vec::new(),
            total_docs: 0,
        }
    }

    /// Index one document. The id is appended unconditionally: adding the same
    /// id twice produces duplicate posting entries.
    pub fn add_document(&mut self, doc_id: DocId, tokens: &[Token]) {
        let mut term_counts: ProbeTable<i32> = ProbeTable::with_capacity(DOC_TERMS_CAPACITY);

        for token in tokens {
            match term_counts.get_mut(&token.text) {
                Some(count) => *count += 1,
                None => term_counts.insert(&token.text, 1),
            }
        }

        for (term, &count) in term_counts.iter() {
            match self.postings.get_mut(term) {
                Some(list) => list.add_posting(doc_id.clone(), count),
                None => {
                    let mut list = PostingList::new();
                    list.add_posting(doc_id.clone(), count);
                    self.postings.insert(term, list);
                }
            }
        }

        self.documents.push(doc_id);
        self.total_docs += 1;
    }

    /// Exact-match lookup; no stemming happens here.
    pub fn get_posting_list(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    pub fn total_documents(&self) -> usize {
        self.total_docs
    }

    /// Indexed document ids in the order they were added (or loaded).
    pub fn documents(&self) -> &[DocId] {
        &self.documents
    }

    /// Terms in table order, the same order `save_to_file` writes them.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys()
    }

    pub fn postings(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.postings.iter()
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_index(&mut writer, &self.documents, &self.postings)?;

        log::info!("Index saved to: {}", path.display());
        Ok(())
    }

    /// Load an index file into this index.
    ///
    /// The document list is replaced, but loaded posting lists are inserted
    /// into the existing term table: terms only present in memory are kept,
    /// terms present in the file are overwritten. The whole file is decoded
    /// before anything is changed, so on error the index is untouched.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let snapshot = read_index(&mut reader)?;

        self.total_docs = snapshot.documents.len();
        self.documents = snapshot.documents;
        for (term, list) in snapshot.postings {
            self.postings.insert(&term, list);
        }

        log::info!(
            "Index loaded from: {} ({} documents, {} terms)",
            path.display(), self.total_docs, self.postings.len()
        );
        Ok(())
    }

    pub fn open(path: &Path) -> Result<Self> {
        let mut index = InvertedIndex::new();
        index.load_from_file(path)?;
        Ok(index)
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}
