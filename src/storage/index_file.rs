//! Binary index file codec.
//!
//! Every size and count is a `u64` little-endian word and every frequency an
//! `i32` little-endian word, independent of the host platform. Strings are
//! length-prefixed raw bytes with no terminator.
//!
//! ```text
//! doc_count
//! doc_count × { len, bytes }
//! vocab_size
//! vocab_size × { term_len, term_bytes, posting_count,
//!                posting_count × { doc_len, doc_bytes, frequency:i32 } }
//! ```

use std::io::{self, Read, Write};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use crate::core::error::{Error, Result};
use crate::core::types::DocId;
use crate::index::posting::PostingList;
use crate::index::probe_table::ProbeTable;

// Counts come from the file, so never trust them for preallocation.
const PREALLOC_LIMIT: usize = 4096;

/// Decoded file contents, not yet applied to an index.
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    pub documents: Vec<DocId>,
    pub postings: Vec<(String, PostingList)>,
}

pub fn write_index<W: Write>(
    writer: &mut W,
    documents: &[DocId],
    postings: &ProbeTable<PostingList>,
) -> Result<()> {
    writer.write_u64::<LittleEndian>(documents.len() as u64)?;
    for doc_id in documents {
        write_bytes(writer, doc_id.as_bytes())?;
    }

    writer.write_u64::<LittleEndian>(postings.len() as u64)?;
    for (term, list) in postings.iter() {
        write_bytes(writer, term.as_bytes())?;
        writer.write_u64::<LittleEndian>(list.len() as u64)?;
        for (doc_id, freq) in list.iter() {
            write_bytes(writer, doc_id.as_bytes())?;
            writer.write_i32::<LittleEndian>(freq)?;
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn read_index<R: Read>(reader: &mut R) -> Result<IndexSnapshot> {
    let doc_count = read_len(reader, "document count")?;
    let mut documents = Vec::with_capacity(doc_count.min(PREALLOC_LIMIT));
    for _ in 0..doc_count {
        documents.push(DocId(read_string(reader, "document id")?));
    }

    let vocab_size = read_len(reader, "vocabulary size")?;
    let mut postings = Vec::with_capacity(vocab_size.min(PREALLOC_LIMIT));
    for _ in 0..vocab_size {
        let term = read_string(reader, "term")?;
        let posting_count = read_len(reader, "posting count")?;

        let mut list = PostingList::new();
        for _ in 0..posting_count {
            let doc_id = DocId(read_string(reader, "posting document id")?);
            let freq = reader.read_i32::<LittleEndian>().map_err(|e| truncated(e, "frequency"))?;
            list.add_posting(doc_id, freq);
        }

        postings.push((term, list));
    }

    let mut trailing = [0u8; 1];
    if reader.read(&mut trailing)? != 0 {
        return Err(Error::corrupt("trailing bytes after vocabulary"));
    }

    Ok(IndexSnapshot { documents, postings })
}

fn write_bytes<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    writer.write_u64::<LittleEndian>(bytes.len() as u64)?;
    writer.write_all(bytes)
}

fn read_len<R: Read>(reader: &mut R, what: &str) -> Result<usize> {
    let len = reader.read_u64::<LittleEndian>().map_err(|e| truncated(e, what))?;
    usize::try_from(len)
        .map_err(|_| Error::corrupt(format!("{} {} does not fit in memory", what, len)))
}

fn read_string<R: Read>(reader: &mut R, what: &str) -> Result<String> {
    let len = read_len(reader, what)?;
    let mut bytes = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    reader.by_ref().take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() != len {
        return Err(Error::corrupt(format!(
            "{} truncated: expected {} bytes, found {}", what, len, bytes.len()
        )));
    }

    String::from_utf8(bytes)
        .map_err(|_| Error::corrupt(format!("{} is not valid UTF-8", what)))
}

fn truncated(err: io::Error, what: &str) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::corrupt(format!("unexpected end of file reading {}", what))
    } else {
        Error::from(err)
    }
}
