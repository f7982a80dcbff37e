//! Full and single-file key extraction.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::core::{
    CancelFlag, KeyEntry, ScanError, dedup_by_rendered, parsers::yaml::parse_yaml_file,
};

/// A translation file that was skipped during extraction.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ExtractResult {
    pub entries: Vec<KeyEntry>,
    pub warnings: Vec<ScanWarning>,
    pub files_scanned: usize,
}

/// Extract keys from a single translation file.
pub fn extract_file(path: &Path) -> Result<Vec<KeyEntry>, ScanError> {
    Ok(parse_yaml_file(path)?.flatten())
}

/// Extract and de-duplicate the keys of every file.
///
/// Files are parsed in parallel but merged in the order given, so the result is
/// the same as a sequential pass. Unparseable files become warnings. If `cancel`
/// is raised before the pass completes, nothing is returned.
pub fn extract_keys(
    files: &[PathBuf],
    separator: &str,
    cancel: &CancelFlag,
) -> Result<ExtractResult, ScanError> {
    let parsed: Vec<Result<Vec<KeyEntry>, ScanError>> = files
        .par_iter()
        .map(|path| {
            if cancel.is_cancelled() {
                return Err(ScanError::Cancelled);
            }
            extract_file(path)
        })
        .collect();

    if cancel.is_cancelled() {
        return Err(ScanError::Cancelled);
    }

    let mut result = ExtractResult {
        files_scanned: files.len(),
        ..Default::default()
    };
    let mut entries = Vec::new();
    for (path, outcome) in files.iter().zip(parsed) {
        match outcome {
            Ok(file_entries) => entries.extend(file_entries),
            Err(ScanError::Cancelled) => return Err(ScanError::Cancelled),
            Err(e) => {
                tracing::warn!("{}", e);
                result.warnings.push(ScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }
    result.entries = dedup_by_rendered(entries, separator);
    Ok(result)
}
