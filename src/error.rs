//! Error types for building the extended word table.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::expansion::DuplicateReport;
use crate::core::types::WordNumber;

/// Fatal conditions that stop a build before anything is written.
#[derive(Debug, Error)]
pub enum VocabError {
    /// At least one literal resolves to more than one word number.
    #[error("{} ambiguous word(s) in vocabulary; each word must map to exactly one word number", .0.len())]
    AmbiguousVocabulary(Vec<DuplicateReport>),

    /// The table text could not be converted to the legacy code page.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl VocabError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A character with no Windows-1255 mapping.
    #[error(
        "cannot encode {character:?} (U+{:04X}) in \"{literal}\"{} on line {line}",
        codepoint(.character),
        owner_suffix(.word_number)
    )]
    Unmappable {
        character: char,
        /// Zero-based line of the rendered table; line 0 is the header.
        line: usize,
        literal: String,
        word_number: Option<WordNumber>,
    },
}

fn codepoint(c: &char) -> u32 {
    u32::from(*c)
}

fn owner_suffix(word_number: &Option<WordNumber>) -> String {
    word_number.map(|n| format!(" (word #{n})")).unwrap_or_default()
}

/// Result type for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;
