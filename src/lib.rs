// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod escapes;
pub mod persistence;
pub mod pipeline;
pub mod serializer;

pub use crate::core::expansion::{
    build_accepted_token_table, collect_existing_literals, find_duplicate_words, find_skipped_prefix_variants,
};
pub use crate::core::prefix::generate_prefix_variants;
pub use crate::error::{EncodingError, VocabError};
