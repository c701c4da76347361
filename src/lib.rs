//! Splits a table into CSV chunk files and merges a prompt into each chunk
//! as a markdown document.

rust_i18n::i18n!("locales", fallback = "en");

pub mod chunking;
pub mod config;
pub mod doctor;
pub mod error;
pub mod i18n;
pub mod merging;
pub mod table;
pub mod ui;

pub use chunking::{ChunkOptions, Chunker};
pub use error::{PrompterError, Result};
pub use merging::Merger;
pub use table::Table;
