//! Line-delimited JSON document source.
//!
//! One object per line:
//! ```jsonl
//! {"url": "https://example.org/a", "html_content": "<p>...</p>", "source": "wiki"}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::error::{Error, ErrorKind, Result};
use crate::ingest::document::{DocumentSource, RawDocument};

const PROGRESS_EVERY: usize = 1000;

#[derive(Debug, Clone)]
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every usable line of `reader`.
    ///
    /// Blank lines are skipped silently; lines that are not UTF-8 or not JSON,
    /// and documents without a url or content, are skipped with a warning.
    /// Only a failing read aborts the load.
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Vec<RawDocument>> {
        let mut documents = Vec::new();
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_num += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(['\n', '\r']),
                Err(e) => {
                    log::warn!("Skipping line {}: {}", line_num, e);
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let doc = match serde_json::from_str::<RawDocument>(line) {
                Ok(doc) => doc,
                Err(e) => {
                    log::warn!("Skipping line {}: {}", line_num, e);
                    continue;
                }
            };

            if !doc.is_indexable() {
                log::warn!("Skipping line {}: missing url or html_content", line_num);
                continue;
            }

            documents.push(doc);
            if documents.len() % PROGRESS_EVERY == 0 {
                log::info!("Loaded {} documents", documents.len());
            }
        }

        log::info!("Total loaded: {} documents", documents.len());
        Ok(documents)
    }
}

impl DocumentSource for JsonlSource {
    fn documents(&mut self) -> Result<Vec<RawDocument>> {
        let file = File::open(&self.path).map_err(|e| {
            Error::new(ErrorKind::Io, format!("Cannot open {}: {}", self.path.display(), e))
        })?;
        Self::read_from(BufReader::new(file))
    }
}
