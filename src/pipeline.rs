// File: src/pipeline.rs
use crate::config::BuildConfig;
use crate::core::expansion::{
    build_accepted_token_table, find_duplicate_words, find_skipped_prefix_variants, SkippedVariantReport,
};
use crate::core::types::Vocabulary;
use crate::error::{Result, VocabError};
use crate::persistence::{load_vocabulary, write_atomically};
use crate::serializer::{render_skipped_report, render_token_table};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Entries in the table, header excluded.
    pub word_count: usize,
    pub skipped: Vec<SkippedVariantReport>,
    pub table_path: PathBuf,
    /// Only set when something was skipped.
    pub audit_path: Option<PathBuf>,
}

/// The in-memory result of validating and rendering a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTable {
    pub bytes: Vec<u8>,
    pub word_count: usize,
    pub skipped: Vec<SkippedVariantReport>,
}

/// Validation only. Fails with every ambiguous literal at once.
pub fn check(vocabulary: &Vocabulary) -> Result<Vec<SkippedVariantReport>> {
    let duplicates = find_duplicate_words(vocabulary);
    if !duplicates.is_empty() {
        return Err(VocabError::AmbiguousVocabulary(duplicates));
    }
    Ok(find_skipped_prefix_variants(vocabulary))
}

/// Validates, expands and encodes without touching the filesystem.
pub fn compile(vocabulary: &Vocabulary, header: &str) -> Result<CompiledTable> {
    let skipped = check(vocabulary)?;
    let table = build_accepted_token_table(vocabulary);
    let bytes = render_token_table(&table, header)?;

    Ok(CompiledTable {
        bytes,
        word_count: table.len(),
        skipped,
    })
}

/// Writes the table, then the audit listing when this run skipped anything.
/// All validation and encoding happens first, so a failure writes nothing.
/// An audit file left by an earlier run is removed on a clean build.
pub fn build(vocabulary: &Vocabulary, config: &BuildConfig) -> Result<BuildSummary> {
    let compiled = compile(vocabulary, &config.header)?;

    let table_path = config.table_path();
    write_atomically(&table_path, &compiled.bytes)?;
    info!(
        words = compiled.word_count,
        path = %table_path.display(),
        "generated extended word table"
    );

    let audit_path = config.audit_path();
    let audit_path = if compiled.skipped.is_empty() {
        remove_stale(&audit_path)?;
        None
    } else {
        warn!(
            count = compiled.skipped.len(),
            "prefix variants skipped due to homograph conflicts"
        );
        write_atomically(&audit_path, render_skipped_report(&compiled.skipped).as_bytes())?;
        Some(audit_path)
    };

    Ok(BuildSummary {
        word_count: compiled.word_count,
        skipped: compiled.skipped,
        table_path,
        audit_path,
    })
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed stale audit listing");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(VocabError::io(path, e)),
    }
}

pub fn build_from_file(vocabulary_path: &Path, config: &BuildConfig) -> Result<BuildSummary> {
    let vocabulary = load_vocabulary(vocabulary_path)?;
    info!(
        groups = vocabulary.groups.len(),
        path = %vocabulary_path.display(),
        "loaded vocabulary"
    );
    build(&vocabulary, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{PartOfSpeech, WordGroup};

    #[test]
    fn check_reports_skips_for_clean_vocabulary() {
        let mut house = WordGroup::new(12, "בית");
        house.target_synonyms = vec!["בית".into()];
        house.part_of_speech = PartOfSpeech::Noun;
        let vocab = Vocabulary::from_groups(vec![house, WordGroup::new(7, "לבית")]);

        let skipped = check(&vocab).unwrap();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].variant, "לבית");
    }

    #[test]
    fn check_fails_with_every_duplicate() {
        let vocab = Vocabulary::from_groups(vec![
            WordGroup::new(1, "get"),
            WordGroup::new(2, "get"),
            WordGroup::new(3, "take"),
            WordGroup::new(4, "Take"),
        ]);
        match check(&vocab) {
            Err(VocabError::AmbiguousVocabulary(duplicates)) => assert_eq!(duplicates.len(), 2),
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }
}
