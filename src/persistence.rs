// File: src/persistence.rs
use crate::core::types::Vocabulary;
use crate::error::{Result, VocabError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads and parses a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| VocabError::io(path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| VocabError::json(path, e))
}

pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    load_json(path)
}

/// Replaces `path` with `bytes` in one step: the data goes to a temp file in
/// the same directory, which is then renamed over the target.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| VocabError::io(parent_dir, e))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| VocabError::io(parent_dir, e))?;
    temp_file.write_all(bytes).map_err(|e| VocabError::io(path, e))?;
    temp_file.flush().map_err(|e| VocabError::io(path, e))?;

    temp_file.persist(path).map_err(|e| VocabError::io(path, e.error))?;
    Ok(())
}

/// Pretty-printed JSON, two-space indent, as the review tooling writes it.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|e| VocabError::json(path, e))?;
    write_atomically(path, content.as_bytes())
}
