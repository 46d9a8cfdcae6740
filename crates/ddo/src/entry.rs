//! Display records produced by the parser

use serde::Serialize;

use crate::error::LookupError;

/// One meaning of a headword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sense {
    /// Provider's numbering, e.g. "1" or "1.a"
    pub level: Option<String>,
    pub definition: String,
    pub example: Option<String>,
    /// Register or style tag, e.g. "slang", "formelt"
    pub style: Option<String>,
    /// 0 for top-level senses, +1 per level of nesting
    pub depth: usize,
}

/// A single dictionary entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub headword: String,
    pub part_of_speech: Option<String>,
    pub senses: Vec<Sense>,
    pub etymology: Option<String>,
    pub phonetic: Option<String>,
    pub inflections: Vec<String>,
    pub synonyms: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(headword: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            ..Default::default()
        }
    }
}

/// Result of looking up one word: a primary entry plus any other matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    word: String,
    entries: Vec<DictionaryEntry>,
}

impl Lookup {
    /// An empty set of entries means the word is not in the dictionary.
    pub fn new(word: impl Into<String>, entries: Vec<DictionaryEntry>) -> Result<Self, LookupError> {
        let word = word.into();
        if entries.is_empty() {
            return Err(LookupError::NotFound(word));
        }
        Ok(Self { word, entries })
    }

    /// The word as typed by the user
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn primary(&self) -> &DictionaryEntry {
        &self.entries[0]
    }

    pub fn others(&self) -> &[DictionaryEntry] {
        &self.entries[1..]
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }
}

/// Ordered completion candidates for a partial word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuggestionList(Vec<String>);

impl SuggestionList {
    /// Keep the candidates that start with `partial` (case-insensitive), in
    /// provider order, up to `limit`.
    pub fn from_candidates(partial: &str, candidates: Vec<String>, limit: usize) -> Self {
        let prefix = partial.to_lowercase();
        Self(
            candidates
                .into_iter()
                .filter(|candidate| candidate.to_lowercase().starts_with(&prefix))
                .take(limit)
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
