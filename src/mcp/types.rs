use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{KeyEntry, KeySource};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project (or any directory inside it)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupKeysParams {
    pub project_root_path: String,
    /// Whitespace-separated terms that must all appear in the entry (case-insensitive)
    #[serde(default)]
    pub query: Option<String>,
    /// Re-scan translation files instead of using the cache
    #[serde(default)]
    pub refresh: Option<bool>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshKeysParams {
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshFileParams {
    pub project_root_path: String,
    /// Saved translation file (absolute, or relative to the project root)
    pub file_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormatInsertionParams {
    pub project_root_path: String,
    /// File the call will be inserted into (absolute, or relative to the project root)
    pub file_path: String,
    /// Selected entry as listed by lookup_keys (`key<separator>value`) or a bare key
    pub selection: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub project_root: String,
    pub project_name: String,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub locales_root: String,
    pub file_pattern: String,
    pub separator: String,
    pub quote_style: String,
    pub namespace: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            locales_root: c.locales_root,
            file_pattern: c.file_pattern,
            separator: c.separator,
            quote_style: c.quote_style.as_char().to_string(),
            namespace: c.namespace,
        }
    }
}

// ============================================================
// Lookup Types (lookup_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupKeysResult {
    pub project: String,
    /// "cache" or "refreshed"
    pub source: String,
    /// Keys cached for the project
    pub total_count: usize,
    /// Keys matching the query
    pub match_count: usize,
    pub items: Vec<KeyItem>,
    /// Translation files skipped because they could not be parsed
    pub warnings: Vec<String>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyItem {
    pub path: String,
    pub value: String,
    pub has_interpolation: bool,
    /// Rendered form to pass back to format_insertion
    pub display: String,
}

impl KeyItem {
    pub fn new(entry: &KeyEntry, separator: &str) -> Self {
        Self {
            path: entry.path.clone(),
            value: entry.value.clone(),
            has_interpolation: entry.has_interpolation,
            display: entry.render(separator),
        }
    }
}

pub fn source_name(source: KeySource) -> String {
    match source {
        KeySource::Cache => "cache",
        KeySource::Refreshed => "refreshed",
    }
    .to_string()
}

// ============================================================
// Refresh Types (refresh_keys, refresh_file)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshKeysResult {
    pub project: String,
    pub key_count: usize,
    pub files_scanned: usize,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshFileResult {
    pub project: String,
    /// "updated", "noCache", "notTranslationFile" or "parseFailed"
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_keys: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

// ============================================================
// Insertion Types (format_insertion)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertionResult {
    pub snippet: String,
    /// Cursor position after insertion, in characters from the start of the snippet
    pub cursor: usize,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
