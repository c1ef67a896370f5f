use std::fmt;
use serde::{Serialize, Deserialize};

/// Operator attached to a query term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    None,   // First term with no preceding keyword
    And,
    Or,
    Not,
}

impl Operator {
    /// Case-insensitive keyword lookup
    pub fn from_keyword(word: &str) -> Option<Operator> {
        if word.eq_ignore_ascii_case("AND") {
            Some(Operator::And)
        } else if word.eq_ignore_ascii_case("OR") {
            Some(Operator::Or)
        } else if word.eq_ignore_ascii_case("NOT") {
            Some(Operator::Not)
        } else {
            None
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keyword = match self {
            Operator::None => "",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        };
        f.write_str(keyword)
    }
}

/// A search term with the operator that combines it into the running result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryToken {
    pub term: String,
    pub operator: Operator,
}

impl QueryToken {
    pub fn new(term: impl Into<String>, operator: Operator) -> Self {
        QueryToken {
            term: term.into(),
            operator,
        }
    }
}
