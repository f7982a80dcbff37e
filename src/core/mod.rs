//! Core engine: extraction, caching and insertion formatting.
//!
//! ## Module Structure
//!
//! - `data`: KeyEntry and TranslationNode
//! - `parsers`: YAML translation file parser
//! - `file_scanner`: locales directory walk
//! - `extract`: full and single-file key extraction
//! - `cache`: per-project key cache and its persistence backends
//! - `insert`: translation call formatting
//! - `project`: project root, name and configuration resolution
//! - `service`: `KeyService`, the application context used by the CLI and MCP server

pub mod cache;
mod cancel;
pub mod data;
mod error;
pub mod extract;
pub mod file_scanner;
pub mod insert;
pub mod parsers;
mod project;
pub mod service;

pub use cancel::CancelFlag;
pub use data::*;
pub use error::ScanError;
pub use project::{Project, ProjectOverrides};
pub use service::{FileRefresh, KeyService, KeySource, LookupOutcome};
