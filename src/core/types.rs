// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime word ID. Literals sharing one number are synonyms.
pub type WordNumber = u16;

/// Word #0 holds the filler words the parser ignores.
pub const FILLER_WORD_NUMBER: WordNumber = 0;

/// Part-of-speech classification assigned by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[default]
    #[serde(rename = "")]
    Unclassified,
    #[serde(rename = "noun")]
    Noun,
    #[serde(rename = "verb")]
    Verb,
    #[serde(rename = "other")]
    Other,
}

/// One semantic vocabulary entry: every literal here resolves to `word_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGroup {
    pub word_number: WordNumber,
    /// The form used in the game's `said()` predicates.
    #[serde(rename = "word")]
    pub canonical_word: String,
    #[serde(rename = "originalSynonyms", default)]
    pub source_synonyms: Vec<String>,
    #[serde(rename = "translatedSynonyms", default)]
    pub target_synonyms: Vec<String>,
    #[serde(rename = "wordType", default)]
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub notes: String,
}

impl WordGroup {
    pub fn new(word_number: WordNumber, canonical_word: &str) -> Self {
        Self {
            word_number,
            canonical_word: canonical_word.to_string(),
            source_synonyms: Vec::new(),
            target_synonyms: Vec::new(),
            part_of_speech: PartOfSpeech::Unclassified,
            notes: String::new(),
        }
    }

    /// Only noun groups outside the filler slot receive prefix variants.
    pub fn is_expandable(&self) -> bool {
        self.word_number != FILLER_WORD_NUMBER && self.part_of_speech == PartOfSpeech::Noun
    }

    /// Every literal the group owns verbatim, in table order:
    /// canonical word, source synonyms, target synonyms.
    pub fn literals(&self) -> impl Iterator<Item = LiteralRef<'_>> {
        std::iter::once(LiteralRef {
            text: self.canonical_word.as_str(),
            provenance: Provenance::CanonicalWord,
        })
        .chain(self.source_synonyms.iter().map(|s| LiteralRef {
            text: s.as_str(),
            provenance: Provenance::SourceSynonym,
        }))
        .chain(self.target_synonyms.iter().map(|s| LiteralRef {
            text: s.as_str(),
            provenance: Provenance::TargetSynonym,
        }))
    }
}

/// Where a literal came from. Only used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    CanonicalWord,
    SourceSynonym,
    TargetSynonym,
    PrefixVariant,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Provenance::CanonicalWord => "base word",
            Provenance::SourceSynonym => "original synonym",
            Provenance::TargetSynonym => "translated synonym",
            Provenance::PrefixVariant => "prefix variant",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralRef<'a> {
    pub text: &'a str,
    pub provenance: Provenance,
}

/// Extraction metadata. Carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VocabularyMetadata {
    pub game_name: String,
    pub content_type: String,
    pub source_language: String,
    pub target_language: String,
    pub extracted_date: String,
    pub total_word_groups: usize,
}

/// The whole `vocabulary.json` document. Groups keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub metadata: VocabularyMetadata,
    #[serde(rename = "vocabulary", default)]
    pub groups: Vec<WordGroup>,
}

impl Vocabulary {
    pub fn from_groups(groups: Vec<WordGroup>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }
}
