use crate::analysis::language::russian::RussianStemmer;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::PostingList;
use crate::query::ast::{Operator, QueryToken};
use crate::query::parser::QueryParser;
use crate::search::merge::SortedMerge;
use crate::search::results::{sort_by_score, SearchResult};

/// Boolean query evaluation over an inverted index
///
/// Borrows the index, so it cannot be mutated while a search is alive.
pub struct BooleanSearch<'a> {
    pub index: &'a InvertedIndex,
    pub stemmer: RussianStemmer,
    pub parser: QueryParser,
}

impl<'a> BooleanSearch<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self::with_stemmer(index, RussianStemmer::new())
    }

    pub fn with_stemmer(index: &'a InvertedIndex, stemmer: RussianStemmer) -> Self {
        BooleanSearch {
            index,
            stemmer,
            parser: QueryParser::new(),
        }
    }

    /// Matching documents in ascending id order, each scored 1.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let tokens = self.parser.parse(query);
        self.execute(&tokens)
            .into_iter()
            .map(|doc_id| SearchResult::new(doc_id, 1))
            .collect()
    }

    /// Matching documents scored by the summed frequency of every query term,
    /// best first. Equal scores keep ascending id order.
    pub fn search_with_ranking(&self, query: &str) -> Vec<SearchResult> {
        let tokens = self.parser.parse(query);
        let doc_ids = self.execute(&tokens);

        let lists: Vec<&PostingList> = tokens.iter()
            .filter_map(|token| self.lookup(&token.term))
            .collect();

        let mut results: Vec<SearchResult> = doc_ids.into_iter()
            .map(|doc_id| {
                let score = lists.iter()
                    .filter_map(|list| list.frequency_of(&doc_id))
                    .map(i64::from)
                    .sum();
                SearchResult::new(doc_id, score)
            })
            .collect();

        sort_by_score(&mut results);
        results
    }

    /// Fold the terms left to right into a sorted document set.
    ///
    /// Terms missing from the index are skipped. While the running set is
    /// empty, any non-NOT term replaces it and NOT terms are ignored.
    pub fn execute(&self, tokens: &[QueryToken]) -> Vec<DocId> {
        let mut result: Vec<DocId> = Vec::new();

        for token in tokens {
            let Some(list) = self.lookup(&token.term) else {
                log::debug!("query term '{}' not in index", token.term);
                continue;
            };
            let current = list.sorted_doc_ids();

            if result.is_empty() {
                if token.operator != Operator::Not {
                    result = current;
                }
                continue;
            }

            result = match token.operator {
                Operator::None | Operator::And => SortedMerge::intersect(&result, &current),
                Operator::Or => SortedMerge::union(&result, &current),
                Operator::Not => SortedMerge::difference(&result, &current),
            };
            log::debug!("after {} '{}': {} documents", token.operator, token.term, result.len());
        }

        result
    }

    fn lookup(&self, term: &str) -> Option<&'a PostingList> {
        let stemmed = self.stemmer.stem(term);
        self.index.get_posting_list(&stemmed)
    }
}
