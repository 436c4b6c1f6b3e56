// File: src/core/prefix.rs

/// Prepositional prefixes glued onto nouns, in emission order:
/// ב (in/at), ה (the), ל (to/for).
pub const TARGET_PREFIXES: [char; 3] = ['ב', 'ה', 'ל'];

/// The Hebrew Unicode block.
const TARGET_SCRIPT: std::ops::RangeInclusive<u32> = 0x0590..=0x05FF;

pub fn is_target_script(c: char) -> bool {
    TARGET_SCRIPT.contains(&(c as u32))
}

pub fn starts_with_target_script(literal: &str) -> bool {
    literal.chars().next().is_some_and(is_target_script)
}

/// The comparison key for literals. The runtime matches case-insensitively.
pub fn normalize(literal: &str) -> String {
    literal.to_lowercase()
}

/// Produces the prefixed forms of a target-language literal.
///
/// Literals in any other script yield nothing. For phrases only the first
/// word takes the prefix; the rest, leading space included, is kept as is.
/// The result is always empty or exactly one variant per prefix.
pub fn generate_prefix_variants(literal: &str) -> Vec<String> {
    if !starts_with_target_script(literal) {
        return Vec::new();
    }

    // The first character is never a space here, so the split is never empty.
    let (first_word, rest) = match literal.find(' ') {
        Some(idx) => literal.split_at(idx),
        None => (literal, ""),
    };

    TARGET_PREFIXES
        .iter()
        .map(|prefix| {
            let mut variant = String::with_capacity(literal.len() + prefix.len_utf8());
            variant.push(*prefix);
            variant.push_str(first_word);
            variant.push_str(rest);
            variant
        })
        .collect()
}
