use std::path::PathBuf;

use crate::core::{
    FileRefresh, KeyEntry, KeySource, extract::ScanWarning, insert::Insertion,
};

#[derive(Debug)]
pub enum CommandSummary {
    Lookup(LookupSummary),
    Refresh(RefreshSummary),
    RefreshFile(RefreshFileSummary),
    Insert(InsertSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    pub project: String,
    pub source: KeySource,
    pub total_count: usize,
    pub matches: Vec<KeyEntry>,
    pub separator: String,
    pub json: bool,
}

#[derive(Debug)]
pub struct RefreshSummary {
    pub project: String,
    pub key_count: usize,
    pub files_scanned: usize,
}

#[derive(Debug)]
pub struct RefreshFileSummary {
    pub project: String,
    pub file: PathBuf,
    pub outcome: FileRefresh,
}

#[derive(Debug)]
pub struct InsertSummary {
    pub insertion: Insertion,
    pub json: bool,
    /// Set when the snippet was written into the file: (file, cursor byte offset).
    pub applied: Option<(PathBuf, usize)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lokey commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Translation files skipped because they could not be parsed.
    pub warnings: Vec<ScanWarning>,
    /// Problems restoring the key cache.
    pub cache_warnings: Vec<String>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            warnings: Vec::new(),
            cache_warnings: Vec::new(),
        }
    }
}
