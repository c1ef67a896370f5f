use crate::query::ast::{Operator, QueryToken};

/// Query parser for the flat boolean grammar
///
/// `[NOT] term {[AND|OR|NOT] term}*`, keywords case-insensitive. There are no
/// parentheses or phrases. Parsing never fails: unknown words are terms and a
/// trailing keyword is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        QueryParser
    }

    /// Examples:
    /// - "rome carthage" -> [rome(None), carthage(And)]
    /// - "rome OR carthage" -> [rome(None), carthage(Or)]
    /// - "NOT rome" -> [rome(Not)]
    pub fn parse(&self, input: &str) -> Vec<QueryToken> {
        let mut tokens = Vec::new();
        let mut pending = Operator::None;

        for word in input.split_whitespace() {
            match Operator::from_keyword(word) {
                Some(op) => pending = op,
                None => {
                    tokens.push(QueryToken::new(word, pending));
                    pending = Operator::And;
                }
            }
        }

        tokens
    }
}
