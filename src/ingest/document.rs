use serde::{Serialize, Deserialize};
use crate::core::error::Result;
use crate::core::types::DocId;

/// A fetched page before any text processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub url: String,
    pub html_content: String,
    #[serde(default)]
    pub source: String,
}

impl RawDocument {
    pub fn new(url: impl Into<String>, html_content: impl Into<String>) -> Self {
        RawDocument {
            url: url.into(),
            html_content: html_content.into(),
            source: String::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn doc_id(&self) -> DocId {
        DocId::new(self.url.clone())
    }

    /// Both the url and the content must be present to be indexable.
    pub fn is_indexable(&self) -> bool {
        !self.url.is_empty() && !self.html_content.is_empty()
    }
}

/// Anything that can hand over a batch of documents to index
pub trait DocumentSource {
    fn documents(&mut self) -> Result<Vec<RawDocument>>;
}

impl DocumentSource for Vec<RawDocument> {
    fn documents(&mut self) -> Result<Vec<RawDocument>> {
        Ok(std::mem::take(self))
    }
}
