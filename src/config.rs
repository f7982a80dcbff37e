use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::insert::InsertOptions;

pub const CONFIG_FILE_NAME: &str = ".lokeyrc.json";

/// Quote character used in the inserted `t(...)` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub quote_style: QuoteStyle,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

fn default_locales_root() -> String {
    "config/locales".to_string()
}

fn default_file_pattern() -> String {
    r"\.yml$".to_string()
}

fn default_separator() -> String {
    ":  ".to_string()
}

fn default_namespace() -> String {
    "I18n".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            file_pattern: default_file_pattern(),
            separator: default_separator(),
            quote_style: QuoteStyle::default(),
            namespace: default_namespace(),
            project_name: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `filePattern` is not a valid regex or `separator` is empty.
    pub fn validate(&self) -> Result<()> {
        self.file_regex()?;
        if self.separator.is_empty() {
            bail!("'separator' must not be empty");
        }
        Ok(())
    }

    pub fn file_regex(&self) -> Result<Regex> {
        Regex::new(&self.file_pattern)
            .with_context(|| format!("Invalid regex in 'filePattern': \"{}\"", self.file_pattern))
    }

    pub fn insert_options(&self) -> InsertOptions {
        InsertOptions {
            quote: self.quote_style,
            namespace: self.namespace.clone(),
            separator: self.separator.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
