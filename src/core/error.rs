use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading translation files.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid YAML document.
    #[error("Failed to parse YAML file {}: {reason}", file.display())]
    Parse { file: PathBuf, reason: String },

    /// The scan was interrupted before it finished.
    #[error("Scan interrupted")]
    Cancelled,
}
