use crate::core::types::DocId;

/// Posting list for a term
/// Note: entries stay in the order documents were added, not sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    pub doc_ids: Vec<DocId>,
    pub term_frequencies: Vec<i32>,  // Parallel to doc_ids
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            doc_ids: Vec::new(),
            term_frequencies: Vec::new(),
        }
    }

    pub fn add_posting(&mut self, doc_id: DocId, term_freq: i32) {
        self.doc_ids.push(doc_id);
        self.term_frequencies.push(term_freq);
    }

    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    pub fn total_freq(&self) -> i64 {
        self.term_frequencies.iter().map(|&f| f as i64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocId, i32)> {
        self.doc_ids.iter().zip(self.term_frequencies.iter().copied())
    }

    /// Frequency recorded for the first entry of `doc_id`, by linear scan.
    pub fn frequency_of(&self, doc_id: &DocId) -> Option<i32> {
        self.iter()
            .find(|(id, _)| *id == doc_id)
            .map(|(_, freq)| freq)
    }

    /// Doc ids sorted ascending, as a fresh vector.
    pub fn sorted_doc_ids(&self) -> Vec<DocId> {
        let mut ids = self.doc_ids.clone();
        ids.sort();
        ids
    }
}
