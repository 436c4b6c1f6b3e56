use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use vocab_core::core::prefix::{normalize, starts_with_target_script};
use vocab_core::core::types::{PartOfSpeech, Vocabulary, WordGroup, WordNumber};
use vocab_core::serializer::{render_token_table, DEFAULT_HEADER};
use vocab_core::{build_accepted_token_table, find_duplicate_words, generate_prefix_variants};

fn literal() -> impl Strategy<Value = String> {
    prop_oneof![
        // A narrow alphabet so prefixes frequently collide with other words.
        prop::collection::vec(prop::sample::select(vec!['א', 'ב', 'ה', 'ל', 'ת']), 1..4)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
        prop::collection::vec(prop::sample::select(vec!['ב', 'ה', 'ת']), 1..3)
            .prop_map(|chars| format!("{} לבן", chars.into_iter().collect::<String>())),
        "[a-c]{1,3}",
    ]
}

fn part_of_speech() -> impl Strategy<Value = PartOfSpeech> {
    prop_oneof![
        Just(PartOfSpeech::Noun),
        Just(PartOfSpeech::Noun),
        Just(PartOfSpeech::Verb),
        Just(PartOfSpeech::Unclassified),
    ]
}

/// Vocabularies whose verbatim literals never cross word numbers.
fn clean_vocabulary() -> impl Strategy<Value = Vocabulary> {
    prop::collection::vec(
        (
            literal(),
            prop::collection::vec(literal(), 0..2),
            prop::collection::vec(literal(), 0..3),
            part_of_speech(),
        ),
        1..8,
    )
    .prop_map(|raw| {
        let mut owned: HashSet<String> = HashSet::new();
        let mut groups = Vec::new();
        for (i, (canonical, source, target, pos)) in raw.into_iter().enumerate() {
            let claim = |lit: &String| !owned.contains(&normalize(lit));
            if !claim(&canonical) {
                continue;
            }
            let source: Vec<String> = source.into_iter().filter(|s| claim(s)).collect();
            let target: Vec<String> = target.into_iter().filter(|s| claim(s)).collect();

            let mut group = WordGroup::new(i as WordNumber + 1, &canonical);
            group.source_synonyms = source;
            group.target_synonyms = target;
            group.part_of_speech = pos;
            for lit in group.literals() {
                owned.insert(normalize(lit.text));
            }
            groups.push(group);
        }
        Vocabulary::from_groups(groups)
    })
}

proptest! {
    #[test]
    fn expansion_shape(s in any::<String>()) {
        let expected = if starts_with_target_script(&s) { 3 } else { 0 };
        prop_assert_eq!(generate_prefix_variants(&s).len(), expected);
    }

    #[test]
    fn hebrew_literals_always_get_three(s in "[\u{05D0}-\u{05EA}][\u{05D0}-\u{05EA} ]{0,6}") {
        let variants = generate_prefix_variants(&s);
        prop_assert_eq!(variants.len(), 3);
        let first_word = s.split(' ').next().unwrap();
        for variant in &variants {
            prop_assert!(variant.chars().skip(1).collect::<String>() == s);
            prop_assert!(variant.contains(first_word));
        }
    }

    #[test]
    fn clean_vocabularies_have_no_duplicates(vocab in clean_vocabulary()) {
        prop_assert!(find_duplicate_words(&vocab).is_empty());
    }

    #[test]
    fn accepted_table_is_unambiguous(vocab in clean_vocabulary()) {
        let table = build_accepted_token_table(&vocab);
        let mut owner: HashMap<String, WordNumber> = HashMap::new();
        for entry in &table {
            let previous = owner.insert(normalize(&entry.literal), entry.word_number);
            prop_assert!(previous.is_none() || previous == Some(entry.word_number));
        }
    }

    #[test]
    fn originals_are_conserved(vocab in clean_vocabulary()) {
        let table = build_accepted_token_table(&vocab);
        let present: HashSet<(String, WordNumber)> =
            table.iter().map(|e| (normalize(&e.literal), e.word_number)).collect();
        for group in &vocab.groups {
            for lit in group.literals() {
                prop_assert!(present.contains(&(normalize(lit.text), group.word_number)));
            }
        }
    }

    #[test]
    fn rendering_is_deterministic(vocab in clean_vocabulary()) {
        let first = render_token_table(&build_accepted_token_table(&vocab), DEFAULT_HEADER).unwrap();
        let second = render_token_table(&build_accepted_token_table(&vocab), DEFAULT_HEADER).unwrap();
        prop_assert_eq!(first, second);
    }
}
