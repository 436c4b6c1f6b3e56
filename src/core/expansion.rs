use crate::core::prefix::{generate_prefix_variants, normalize};
use crate::core::table::TokenTable;
use crate::core::types::{Provenance, Vocabulary, WordGroup, WordNumber};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// One registration of a literal against a word number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub word_number: WordNumber,
    pub provenance: Provenance,
}

/// A normalized literal that resolves to more than one word number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub word: String,
    pub occurrences: Vec<Occurrence>,
}

/// A prefix variant that was not generated because another word owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedVariantReport {
    pub variant: String,
    pub base_synonym: String,
    pub source_word_number: WordNumber,
    pub source_word: String,
    pub conflict_word_number: WordNumber,
    pub conflict_word: String,
}

/// Every literal that exists verbatim in the vocabulary, normalized.
/// A generated variant found here is never emitted.
pub fn collect_existing_literals(vocabulary: &Vocabulary) -> HashSet<String> {
    vocabulary
        .groups
        .iter()
        .flat_map(WordGroup::literals)
        .map(|lit| normalize(lit.text))
        .collect()
}

/// Prefix variants of `synonym` that do not shadow an existing literal.
fn fresh_variants<'a>(
    synonym: &str,
    existing: &'a HashSet<String>,
) -> impl Iterator<Item = String> + 'a {
    generate_prefix_variants(synonym)
        .into_iter()
        .filter(move |variant| !existing.contains(&normalize(variant)))
}

/// Finds every literal that would map to more than one word number once
/// noun groups are expanded. Runs to completion and reports all of them.
///
/// A non-empty result means the table must not be built.
pub fn find_duplicate_words(vocabulary: &Vocabulary) -> Vec<DuplicateReport> {
    let existing = collect_existing_literals(vocabulary);
    let mut registry: IndexMap<String, Vec<Occurrence>> = IndexMap::new();

    let mut register = |literal: &str, word_number: WordNumber, provenance: Provenance| {
        registry.entry(normalize(literal)).or_default().push(Occurrence {
            word_number,
            provenance,
        });
    };

    for group in &vocabulary.groups {
        for literal in group.literals() {
            register(literal.text, group.word_number, literal.provenance);
        }
        if group.is_expandable() {
            for synonym in &group.target_synonyms {
                for variant in fresh_variants(synonym, &existing) {
                    register(&variant, group.word_number, Provenance::PrefixVariant);
                }
            }
        }
    }

    let duplicates: Vec<DuplicateReport> = registry
        .into_iter()
        .filter(|(_, occurrences)| {
            let first = occurrences[0].word_number;
            occurrences.iter().any(|o| o.word_number != first)
        })
        .map(|(word, occurrences)| DuplicateReport { word, occurrences })
        .collect();

    debug!(duplicates = duplicates.len(), "duplicate scan finished");
    duplicates
}

/// Lists the homograph collisions that prefix expansion stepped around.
/// Informational only; assumes `find_duplicate_words` came back empty.
pub fn find_skipped_prefix_variants(vocabulary: &Vocabulary) -> Vec<SkippedVariantReport> {
    // Later groups overwrite earlier owners of the same literal.
    let mut owner: HashMap<String, &WordGroup> = HashMap::new();
    for group in &vocabulary.groups {
        for literal in group.literals() {
            owner.insert(normalize(literal.text), group);
        }
    }

    let mut skipped = Vec::new();
    for group in vocabulary.groups.iter().filter(|g| g.is_expandable()) {
        for synonym in &group.target_synonyms {
            for variant in generate_prefix_variants(synonym) {
                let Some(conflict) = owner.get(&normalize(&variant)) else {
                    continue;
                };
                if conflict.word_number == group.word_number {
                    continue;
                }
                skipped.push(SkippedVariantReport {
                    variant,
                    base_synonym: synonym.clone(),
                    source_word_number: group.word_number,
                    source_word: group.canonical_word.clone(),
                    conflict_word_number: conflict.word_number,
                    conflict_word: conflict.canonical_word.clone(),
                });
            }
        }
    }

    debug!(skipped = skipped.len(), "homograph scan finished");
    skipped
}

/// Builds the table the runtime will load: every verbatim literal plus the
/// prefix variants that shadow nothing, groups in input order.
///
/// Only call this once `find_duplicate_words` has returned empty.
pub fn build_accepted_token_table(vocabulary: &Vocabulary) -> TokenTable {
    let existing = collect_existing_literals(vocabulary);
    let mut table = TokenTable::new();

    for group in &vocabulary.groups {
        let number = group.word_number;

        table.push(&group.canonical_word, number);
        for synonym in &group.source_synonyms {
            table.push(synonym, number);
        }

        for synonym in &group.target_synonyms {
            table.push(synonym, number);
            if group.is_expandable() {
                for variant in fresh_variants(synonym, &existing) {
                    table.push(&variant, number);
                }
            }
        }
    }

    debug!(entries = table.len(), "token table built");
    table
}
