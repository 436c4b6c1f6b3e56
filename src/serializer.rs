// File: src/serializer.rs
//! Rendering of the accepted table into `WORDS.TOK.EXTENDED` bytes.
//!
//! Text assembly and code page conversion are separate stages so the table
//! logic never sees bytes.

use crate::core::expansion::SkippedVariantReport;
use crate::core::table::TokenTable;
use crate::core::types::WordNumber;
use crate::error::EncodingError;
use encoding_rs::{EncoderResult, WINDOWS_1255};
use std::fmt::Write as _;

/// The header line the runtime expects ahead of the entries.
pub const DEFAULT_HEADER: &str = "WORDS.TOK: Unofficial extended format to support ASCII range of 128-255";

/// `header\n` then `literal\0NNNNN\n` per entry, final newline included.
pub fn render_table_text(table: &TokenTable, header: &str) -> String {
    let mut text = String::with_capacity(header.len() + 1 + table.len() * 16);
    text.push_str(header);
    text.push('\n');
    for entry in table {
        // Writing into a String cannot fail.
        let _ = writeln!(text, "{}\0{:05}", entry.literal, entry.word_number);
    }
    text
}

/// Converts assembled text to Windows-1255. Stops at the first character the
/// code page cannot represent; nothing is ever substituted.
pub fn encode_legacy(text: &str) -> Result<Vec<u8>, EncodingError> {
    let mut encoder = WINDOWS_1255.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4096];
    let mut consumed = 0;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(&text[consumed..], &mut buf, true);
        out.extend_from_slice(&buf[..written]);
        consumed += read;
        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(character) => {
                return Err(unmappable_at(text, consumed, character));
            }
        }
    }
}

/// `end` is the byte offset just past the offending character.
fn unmappable_at(text: &str, end: usize, character: char) -> EncodingError {
    let start = text[..end].rfind('\n').map_or(0, |i| i + 1);
    let stop = text[end..].find('\n').map_or(text.len(), |i| end + i);
    let line_text = &text[start..stop];
    let line = text[..start].matches('\n').count();

    let (literal, word_number) = match line_text.split_once('\0') {
        Some((literal, number)) => (literal, number.parse::<WordNumber>().ok()),
        None => (line_text, None),
    };

    EncodingError::Unmappable {
        character,
        line,
        literal: literal.to_string(),
        word_number,
    }
}

/// Renders and encodes in one step.
pub fn render_token_table(table: &TokenTable, header: &str) -> Result<Vec<u8>, EncodingError> {
    encode_legacy(&render_table_text(table, header))
}

/// Plain-text audit listing for `SKIPPED_PREFIX_VARIANTS.txt`.
pub fn render_skipped_report(skipped: &[SkippedVariantReport]) -> String {
    let mut lines: Vec<String> = vec![
        "Skipped Prefix Variants Due to Conflicts".into(),
        "=========================================".into(),
        String::new(),
        "These prefix variants were NOT generated because they".into(),
        "conflict with existing words in the vocabulary (homographs).".into(),
        String::new(),
        format!("Total skipped: {}", skipped.len()),
        String::new(),
    ];

    for s in skipped {
        lines.push(format!("\"{}\" (prefix of \"{}\")", s.variant, s.base_synonym));
        lines.push(format!("  Would add to: #{} ({})", s.source_word_number, s.source_word));
        lines.push(format!("  Conflicts with: #{} ({})", s.conflict_word_number, s.conflict_word));
        lines.push(String::new());
    }

    lines.join("\n")
}
