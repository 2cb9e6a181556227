use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, UnscrambleError};

/// On-disk word-list document: `{"word_list": ["cat", "act", ...]}`
#[derive(Debug, Deserialize)]
struct WordlistDocument {
    word_list: Vec<String>,
}

/// An ordered word list loaded from an external source.
///
/// Entries are treated as opaque strings; nothing is deduplicated or
/// normalized here. The only structural requirement is that the list is
/// non-empty, so a misconfigured source fails startup instead of quietly
/// serving an index with no matches.
#[derive(Clone, Debug)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Load a word list from a JSON document on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(UnscrambleError::WordlistNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a word-list document from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let doc: WordlistDocument = serde_json::from_reader(reader)?;
        Self::from_words(doc.word_list)
    }

    /// Wrap an already-materialized word sequence.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(UnscrambleError::WordlistEmpty);
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
