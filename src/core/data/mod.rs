//! Core data types shared by the extractor, the cache and the formatter.
//!
//! ## Module Structure
//!
//! - `key_entry`: KeyEntry (one flattened key) and placeholder detection
//! - `node`: TranslationNode (parsed translation document) and flattening

pub mod key_entry;
pub mod node;

pub use key_entry::{KeyEntry, dedup_by_rendered, has_interpolation};
pub use node::TranslationNode;
