use anyhow::Result;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::open_project};
use crate::core::service::filter_entries;

/// Lookup using the cache, falling back to (or forcing with `--refresh`) a full scan.
pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let (project, mut service) = open_project(&cmd.common)?;
    let outcome = service.lookup(&project, cmd.refresh)?;

    let query = cmd.query.join(" ");
    let matches = filter_entries(&outcome.entries, &query, project.separator())
        .into_iter()
        .cloned()
        .collect();

    let mut result = CommandResult::new(CommandSummary::Lookup(LookupSummary {
        project: project.name.clone(),
        source: outcome.source,
        total_count: outcome.entries.len(),
        matches,
        separator: project.config.separator.clone(),
        json: cmd.json,
    }));
    result.warnings = outcome.warnings;
    result.cache_warnings = service.load_warnings;
    Ok(result)
}
