// File: src/config.rs
use crate::serializer::DEFAULT_HEADER;
use std::path::PathBuf;

/// File name the runtime looks for next to the compiled game resources.
pub const TABLE_FILE_NAME: &str = "WORDS.TOK.EXTENDED";
pub const AUDIT_FILE_NAME: &str = "SKIPPED_PREFIX_VARIANTS.txt";

/// Where and how a build writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub output_dir: PathBuf,
    pub table_file_name: String,
    pub audit_file_name: String,
    pub header: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            table_file_name: TABLE_FILE_NAME.to_string(),
            audit_file_name: AUDIT_FILE_NAME.to_string(),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

impl BuildConfig {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn table_path(&self) -> PathBuf {
        self.output_dir.join(&self.table_file_name)
    }

    pub fn audit_path(&self) -> PathBuf {
        self.output_dir.join(&self.audit_file_name)
    }
}
