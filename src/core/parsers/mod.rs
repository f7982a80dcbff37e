//! File parsers for translation files.
//!
//! - `yaml`: YAML locale file parser (produces `TranslationNode` documents)

pub mod yaml;
