use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use lokey::{core::cache::MemoryStore, mcp::LokeyMcpServer};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary Rails-like project with a config/locales/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("config/locales"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with locale files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_locales(vec![
    ///     ("en.yml", "en:\n  key: value\n"),
    /// ])?;
    /// ```
    pub fn with_locales(files: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in files {
            fixture.write_locale_file(name, content)?;
        }
        Ok(fixture)
    }

    /// Write a YAML file to config/locales/<name>
    pub fn write_locale_file(&self, name: &str, content: &str) -> Result<()> {
        self.write_file(&format!("config/locales/{}", name), content)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .lokeyrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".lokeyrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }

    /// Name the project is cached under (its directory name)
    pub fn project_name(&self) -> String {
        self.project_root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Server with an in-memory cache so tests never touch the user's cache file
pub fn test_server() -> LokeyMcpServer {
    LokeyMcpServer::with_store(MemoryStore::new())
}

// ============================================================================
// Fixture Generators
// ============================================================================

pub const EN_YML: &str = "\
en:
  greetings:
    welcome: \"Welcome, %{name}!\"
    bye: Goodbye
  errors:
    not_found: Not found
";

/// Create a fixture with one English locale file
pub fn fixture_basic() -> Result<McpTestFixture> {
    McpTestFixture::with_locales(vec![("en.yml", EN_YML)])
}

/// Create a fixture with a locale file that cannot be parsed
pub fn fixture_with_broken_file() -> Result<McpTestFixture> {
    McpTestFixture::with_locales(vec![
        ("broken.yml", "en:\n  oops: [unclosed\n"),
        ("en.yml", EN_YML),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a lookup result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Paths of the items in a lookup result, in order
pub fn item_paths(result: &Value) -> Vec<String> {
    result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap().to_string())
        .collect()
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}

#[test]
fn test_fixture_layout() {
    let fixture = fixture_basic().unwrap();
    assert!(fixture.root_path().join("config/locales/en.yml").exists());
}
