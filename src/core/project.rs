use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::{Config, QuoteStyle, load_config};

/// Command-line values that take priority over `.lokeyrc.json`.
#[derive(Debug, Clone, Default)]
pub struct ProjectOverrides {
    pub locales_root: Option<String>,
    pub project_name: Option<String>,
    pub quote_style: Option<QuoteStyle>,
}

/// A resolved project: its root, its cache identifier and its configuration.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--locales-root config/i18n`)
/// 2. `.lokeyrc.json` config file
/// 3. Built-in defaults
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    /// Key of this project in the cache.
    pub name: String,
    pub config: Config,
    file_regex: Regex,
}

impl Project {
    /// Resolve the project containing `start`.
    ///
    /// The root is the directory holding `.lokeyrc.json`, else the nearest
    /// ancestor with a `.git` entry, else `start` itself.
    pub fn resolve(start: &Path, overrides: &ProjectOverrides) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Project path does not exist: {}", start.display()))?;

        let loaded = load_config(&start)?;
        let root = match loaded.path.as_deref().and_then(Path::parent) {
            Some(dir) => dir.to_path_buf(),
            None => find_git_root(&start).unwrap_or_else(|| start.clone()),
        };

        let mut config = loaded.config;
        if let Some(locales_root) = &overrides.locales_root {
            config.locales_root = locales_root.clone();
        }
        if let Some(quote_style) = overrides.quote_style {
            config.quote_style = quote_style;
        }
        if let Some(project_name) = &overrides.project_name {
            config.project_name = Some(project_name.clone());
        }

        Self::new(root, config)
    }

    pub fn new(root: PathBuf, config: Config) -> Result<Self> {
        config.validate()?;
        let file_regex = config.file_regex()?;
        let name = config
            .project_name
            .clone()
            .unwrap_or_else(|| dir_name(&root));
        Ok(Self {
            root,
            name,
            config,
            file_regex,
        })
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.root.join(&self.config.locales_root)
    }

    pub fn file_regex(&self) -> &Regex {
        &self.file_regex
    }

    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    /// Make `path` absolute against the project root.
    pub fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

fn dir_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| root.to_string_lossy().to_string())
}
