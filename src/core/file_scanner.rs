use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

/// Result of scanning the locales directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching translation files, in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect translation files under `locales_dir`.
///
/// Only the file name is matched against `pattern`. A missing directory is not
/// an error: it simply yields no files.
pub fn scan_locale_files(locales_dir: &Path, pattern: &Regex) -> ScanResult {
    let mut result = ScanResult::default();

    if !locales_dir.is_dir() {
        tracing::debug!(dir = %locales_dir.display(), "locales directory not found");
        return result;
    }

    for entry in WalkDir::new(locales_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                tracing::warn!("Cannot access path: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && is_translation_file(entry.path(), pattern) {
            result.files.push(entry.into_path());
        }
    }

    tracing::debug!(
        dir = %locales_dir.display(),
        files = result.files.len(),
        "scanned locales directory"
    );
    result
}

/// Whether the file name of `path` matches the translation file pattern.
pub fn is_translation_file(path: &Path, pattern: &Regex) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| pattern.is_match(name))
}
