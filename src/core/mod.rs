// src/core/mod.rs

pub mod expansion;
pub mod prefix;
pub mod table;
pub mod types;
