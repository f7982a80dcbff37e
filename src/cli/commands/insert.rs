use anyhow::Result;

use super::super::args::InsertCommand;
use super::{CommandResult, CommandSummary, InsertSummary, helper::open_project};
use crate::core::insert::splice_into_file;

pub fn insert(cmd: InsertCommand) -> Result<CommandResult> {
    let (project, mut service) = open_project(&cmd.common)?;
    let file = std::path::absolute(&cmd.file)?;
    let insertion = service.insertion(&project, &cmd.selection, &file)?;

    let applied = match (cmd.apply, cmd.offset) {
        (true, Some(offset)) => {
            let cursor = splice_into_file(&file, offset, &insertion)?;
            Some((file, cursor))
        }
        _ => None,
    };

    let mut result = CommandResult::new(CommandSummary::Insert(InsertSummary {
        insertion,
        json: cmd.json,
        applied,
    }));
    result.cache_warnings = service.load_warnings;
    Ok(result)
}
