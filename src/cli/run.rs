use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, init::init, insert::insert, lookup::lookup,
        refresh::{refresh, refresh_file},
    },
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Refresh(cmd)) => refresh(cmd),
        Some(Command::RefreshFile(cmd)) => refresh_file(cmd),
        Some(Command::Insert(cmd)) => insert(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
