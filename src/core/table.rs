// --- File: src/core/table.rs
use crate::core::prefix::normalize;
use crate::core::types::WordNumber;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    pub literal: String,
    pub word_number: WordNumber,
}

/// The accepted `(literal, word number)` table, in emission order.
/// Exact repeats of a normalized literal under the same number are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    entries: Vec<TokenEntry>,
    seen: HashSet<(String, WordNumber)>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the pair unless it is already present. Returns whether it was added.
    pub fn push(&mut self, literal: &str, word_number: WordNumber) -> bool {
        if !self.seen.insert((normalize(literal), word_number)) {
            return false;
        }
        self.entries.push(TokenEntry {
            literal: literal.to_string(),
            word_number,
        });
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Literals (as written) tagged with `word_number`, in table order.
    pub fn literals_for(&self, word_number: WordNumber) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.word_number == word_number)
            .map(|e| e.literal.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a TokenTable {
    type Item = &'a TokenEntry;
    type IntoIter = std::slice::Iter<'a, TokenEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
