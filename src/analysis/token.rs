use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // Lowercased token text
    pub position: usize,   // Byte offset of the token start in the source text
}

impl Token {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Token length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
