// File: src/escapes.rs
//! Repair of escape sequences translators tend to strip, e.g. `%m8\"%w1\"`
//! coming back as `%m8"%w1"`. Patterns are copied from the original text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One translatable message from a logic file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMessage {
    pub logic_file: String,
    pub message_number: u32,
    pub original: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub placeholders: Vec<String>,
}

/// The `messages.json` document. Metadata is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesFile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub metadata: Value,
    pub messages: Vec<TranslationMessage>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EscapeFixStats {
    /// Messages with a non-empty translation.
    pub checked: usize,
    pub fixed: usize,
}

const ESCAPED_QUOTE: &str = "\\\"";
const ESCAPED_NEWLINE: &str = "\\n";
const ESCAPED_BACKSLASH: &str = "\\\\";

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn needs_quote_fix(original: &str, translation: &str) -> bool {
    original.contains(ESCAPED_QUOTE) && translation.contains('"') && !translation.contains(ESCAPED_QUOTE)
}

fn needs_newline_fix(original: &str, translation: &str) -> bool {
    original.contains(ESCAPED_NEWLINE) && !translation.contains(ESCAPED_NEWLINE) && translation.contains('\n')
}

/// Restores `\"` and `\n` escapes that exist in `original` but were lost in
/// `translation`. Blank translations come back unchanged.
pub fn fix_escape_sequences(original: &str, translation: &str) -> String {
    if is_blank(translation) {
        return translation.to_string();
    }

    let mut fixed = translation.to_string();

    if needs_quote_fix(original, &fixed) {
        fixed = fixed.replace('"', ESCAPED_QUOTE);
    }

    if original.contains(ESCAPED_NEWLINE) && !fixed.contains(ESCAPED_NEWLINE) {
        fixed = fixed.replace('\n', ESCAPED_NEWLINE);
    }

    // A lone `\` against an original `\\` could be a dropped escape or a
    // legitimate one, so doubled backslashes are left alone.
    if original.contains(ESCAPED_BACKSLASH) && !fixed.contains(ESCAPED_BACKSLASH) && fixed.contains('\\') {
        tracing::trace!("leaving possible dropped backslash escape untouched");
    }

    fixed
}

/// Repairs every message in place and counts what changed.
/// With `dry_run` nothing is modified; the count is what would change.
pub fn fix_messages(file: &mut MessagesFile, dry_run: bool) -> EscapeFixStats {
    let mut stats = EscapeFixStats::default();

    for message in &mut file.messages {
        if is_blank(&message.translation) {
            continue;
        }
        stats.checked += 1;

        if !needs_quote_fix(&message.original, &message.translation)
            && !needs_newline_fix(&message.original, &message.translation)
        {
            continue;
        }

        let repaired = fix_escape_sequences(&message.original, &message.translation);
        if repaired == message.translation {
            continue;
        }

        if dry_run {
            tracing::info!(
                logic_file = %message.logic_file,
                message = message.message_number,
                before = %message.translation,
                after = %repaired,
                "would fix escapes"
            );
        } else {
            tracing::debug!(logic_file = %message.logic_file, message = message.message_number, "fixed escapes");
            message.translation = repaired;
        }
        stats.fixed += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message(original: &str, translation: &str) -> TranslationMessage {
        TranslationMessage {
            logic_file: "0.agilogic".into(),
            message_number: 1,
            original: original.into(),
            translation: translation.into(),
            notes: String::new(),
            placeholders: Vec::new(),
        }
    }

    #[test]
    fn restores_escaped_quotes() {
        assert_eq!(
            fix_escape_sequences(r#"%m8\"%w1\""#, r#"%m8"%w1""#),
            r#"%m8\"%w1\""#
        );
    }

    #[test]
    fn leaves_already_escaped_quotes() {
        let translation = r#"אמר \"שלום\""#;
        assert_eq!(fix_escape_sequences(r#"said \"hi\""#, translation), translation);
    }

    #[test]
    fn restores_escaped_newlines() {
        assert_eq!(fix_escape_sequences(r"one\ntwo", "אחת\nשתיים"), r"אחת\nשתיים");
    }

    #[test]
    fn blank_translation_is_untouched() {
        assert_eq!(fix_escape_sequences(r#"\"x\""#, "  "), "  ");
        assert_eq!(fix_escape_sequences(r#"\"x\""#, ""), "");
    }

    #[test]
    fn doubled_backslash_is_never_guessed() {
        assert_eq!(fix_escape_sequences(r"C:\\dir", r"C:\dir"), r"C:\dir");
    }

    #[test]
    fn fix_messages_counts_and_mutates() {
        let mut file = MessagesFile {
            version: "1".into(),
            metadata: Value::Null,
            messages: vec![
                message(r#"\"a\""#, r#""b""#),
                message("plain", "פשוט"),
                message("untranslated", ""),
            ],
        };

        let stats = fix_messages(&mut file, false);
        assert_eq!(stats, EscapeFixStats { checked: 2, fixed: 1 });
        assert_eq!(file.messages[0].translation, r#"\"b\""#);
    }

    #[test]
    fn dry_run_does_not_mutate() {
        let mut file = MessagesFile {
            version: "1".into(),
            metadata: Value::Null,
            messages: vec![message(r"a\nb", "א\nב")],
        };

        let stats = fix_messages(&mut file, true);
        assert_eq!(stats.fixed, 1);
        assert_eq!(file.messages[0].translation, "א\nב");
    }

    #[test]
    fn newline_fix_needs_a_real_newline() {
        let mut file = MessagesFile {
            version: "1".into(),
            metadata: Value::Null,
            messages: vec![message(r"a\nb", "אב")],
        };
        assert_eq!(fix_messages(&mut file, false).fixed, 0);
    }
}
