//! Application context tying the extractor, the cache and its store together.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{
    CancelFlag, KeyEntry, Project, ScanError,
    cache::{CacheStore, ProjectCache},
    extract::{ExtractResult, ScanWarning, extract_file, extract_keys},
    file_scanner::{is_translation_file, scan_locale_files},
    insert::{Insertion, Selection, format_insertion},
};

/// Where a lookup's keys came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeySource {
    Cache,
    Refreshed,
}

#[derive(Debug)]
pub struct LookupOutcome {
    pub entries: Vec<KeyEntry>,
    pub source: KeySource,
    pub warnings: Vec<ScanWarning>,
    /// Number of translation files parsed; 0 for cache hits.
    pub files_scanned: usize,
}

/// Result of handling a saved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRefresh {
    /// The file is outside the locales directory or does not match the pattern.
    NotTranslationFile,
    /// The project has not been scanned yet, so there is nothing to patch.
    NoCache,
    ParseFailed(String),
    Updated { file_keys: usize, total: usize },
}

/// Owns the project cache and keeps its store in sync.
pub struct KeyService {
    cache: ProjectCache,
    store: Box<dyn CacheStore>,
    cancel: CancelFlag,
    /// Problems met while restoring the cache.
    pub load_warnings: Vec<String>,
}

impl KeyService {
    /// Restore the cache from `store`. An unreadable snapshot is reported and
    /// replaced by an empty cache.
    pub fn open(store: impl CacheStore + 'static) -> Self {
        let mut load_warnings = Vec::new();
        let cache = match store.load() {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!("{:#}", e);
                load_warnings.push(format!("{:#}", e));
                ProjectCache::default()
            }
        };
        Self {
            cache,
            store: Box::new(store),
            cancel: CancelFlag::new(),
            load_warnings,
        }
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cache(&self) -> &ProjectCache {
        &self.cache
    }

    /// Keys for `project`, from the cache unless missing or `force_refresh`.
    pub fn lookup(&mut self, project: &Project, force_refresh: bool) -> Result<LookupOutcome> {
        if !force_refresh && self.cache.contains(&project.name) {
            tracing::debug!(project = %project.name, "cache hit");
            return Ok(LookupOutcome {
                entries: self.cache.get(&project.name).to_vec(),
                source: KeySource::Cache,
                warnings: Vec::new(),
                files_scanned: 0,
            });
        }

        let result = self.refresh_all(project)?;
        Ok(LookupOutcome {
            entries: result.entries,
            source: KeySource::Refreshed,
            warnings: result.warnings,
            files_scanned: result.files_scanned,
        })
    }

    /// Re-scan every translation file and replace the project's cache.
    ///
    /// An interrupted scan leaves the cache and the store untouched.
    pub fn refresh_all(&mut self, project: &Project) -> Result<ExtractResult> {
        let scan = scan_locale_files(&project.locales_dir(), project.file_regex());
        if let Err(e) = self.cancel.arm() {
            tracing::debug!("Cannot register interrupt handler: {}", e);
        }
        let result = extract_keys(&scan.files, project.separator(), &self.cancel)?;

        tracing::debug!(
            project = %project.name,
            files = result.files_scanned,
            skipped = scan.skipped_count,
            keys = result.entries.len(),
            "full refresh"
        );
        self.cache
            .refresh_all(project.name.clone(), result.entries.clone());
        self.persist()?;
        Ok(result)
    }

    /// Patch the project's cache after `file` was saved.
    pub fn refresh_file(&mut self, project: &Project, file: &Path) -> Result<FileRefresh> {
        let file = project.absolutize(file);
        let file = file.canonicalize().unwrap_or(file);
        // Compare resolved paths: the locales directory may be a symlink or contain `..`.
        let locales_dir = project.locales_dir();
        let locales_dir = locales_dir.canonicalize().unwrap_or(locales_dir);
        if !file.starts_with(&locales_dir) || !is_translation_file(&file, project.file_regex()) {
            return Ok(FileRefresh::NotTranslationFile);
        }

        if !self.cache.contains(&project.name) {
            return Ok(FileRefresh::NoCache);
        }

        let entries = match extract_file(&file) {
            Ok(entries) => entries,
            Err(ScanError::Cancelled) => return Err(ScanError::Cancelled.into()),
            Err(e) => {
                tracing::warn!("{}", e);
                return Ok(FileRefresh::ParseFailed(e.to_string()));
            }
        };

        let file_keys = entries.len();
        self.cache
            .refresh_file(&project.name, entries, project.separator());
        self.persist()?;

        Ok(FileRefresh::Updated {
            file_keys,
            total: self.cache.get(&project.name).len(),
        })
    }

    /// Format `selection` for insertion into `file`.
    ///
    /// A bare key is looked up in the cached entries so placeholders are still
    /// detected.
    pub fn insertion(
        &mut self,
        project: &Project,
        selection: &str,
        file: &Path,
    ) -> Result<Insertion> {
        let mut selection = Selection::parse(selection, project.separator());
        if selection.value.is_none() {
            let outcome = self.lookup(project, false)?;
            selection.value = outcome
                .entries
                .into_iter()
                .find(|entry| entry.path == selection.key)
                .map(|entry| entry.value);
        }

        Ok(format_insertion(
            &selection,
            &project.absolutize(file),
            &project.root,
            &project.config.insert_options(),
        ))
    }

    fn persist(&self) -> Result<()> {
        self.store
            .save(&self.cache)
            .context("Failed to save key cache")
    }
}

/// Entries whose rendered form contains every whitespace-separated term of
/// `query` (case-insensitive). An empty query keeps everything.
pub fn filter_entries<'a>(
    entries: &'a [KeyEntry],
    query: &str,
    separator: &str,
) -> Vec<&'a KeyEntry> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    entries
        .iter()
        .filter(|entry| {
            let rendered = entry.render(separator).to_lowercase();
            terms.iter().all(|term| rendered.contains(term.as_str()))
        })
        .collect()
}
