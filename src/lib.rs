//! lokey - translation key lookup for Rails projects
//!
//! lokey is a CLI tool and library that scans a project's YAML locale files,
//! flattens their nested keys into dotted identifiers, caches the list per
//! project and formats the `t(...)` call to insert at the cursor.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, caching and insertion formatting
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
