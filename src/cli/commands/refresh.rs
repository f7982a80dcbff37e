use anyhow::Result;

use super::super::args::{RefreshCommand, RefreshFileCommand};
use super::{
    CommandResult, CommandSummary, RefreshFileSummary, RefreshSummary, helper::open_project,
};

/// Force a full re-scan of the project's translation files.
pub fn refresh(cmd: RefreshCommand) -> Result<CommandResult> {
    let (project, mut service) = open_project(&cmd.common)?;
    let extracted = service.refresh_all(&project)?;

    let mut result = CommandResult::new(CommandSummary::Refresh(RefreshSummary {
        project: project.name.clone(),
        key_count: extracted.entries.len(),
        files_scanned: extracted.files_scanned,
    }));
    result.warnings = extracted.warnings;
    result.cache_warnings = service.load_warnings;
    Ok(result)
}

/// Patch the cache for one saved translation file.
pub fn refresh_file(cmd: RefreshFileCommand) -> Result<CommandResult> {
    let (project, mut service) = open_project(&cmd.common)?;
    let outcome = service.refresh_file(&project, &std::path::absolute(&cmd.file)?)?;

    let mut result = CommandResult::new(CommandSummary::RefreshFile(RefreshFileSummary {
        project: project.name.clone(),
        file: cmd.file,
        outcome,
    }));
    result.cache_warnings = service.load_warnings;
    Ok(result)
}
