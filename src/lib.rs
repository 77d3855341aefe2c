//! Loader for Iranian statutory law texts and famous-case summaries.
//!
//! Law documents are split into numbered articles (`ماده N`) and written to
//! SQLite plus a JSONL export; case summaries are stored one row per file.

pub mod aliases;
pub mod article;
pub mod cases;
pub mod db;
pub mod digits;
pub mod error;
pub mod jsonl;
pub mod law;
pub mod naming;
pub mod report;
pub mod settings;
pub mod source;

pub use error::{LoaderError, Result};
