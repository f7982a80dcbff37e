//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `lookup`: List translation keys (from cache, refreshing on a miss)
//! - `refresh`: Re-scan all translation files and rebuild the project cache
//! - `refresh-file`: Patch the cache after a single translation file was saved
//! - `insert`: Format the `t(...)` call for a selected key
//! - `init`: Initialize lokey configuration file
//! - `serve`: Start MCP server for editor and AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::QuoteStyle;
use crate::core::ProjectOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Lookup(cmd)) => Some(&cmd.common),
            Some(Command::Refresh(cmd)) => Some(&cmd.common),
            Some(Command::RefreshFile(cmd)) => Some(&cmd.common),
            Some(Command::Insert(cmd)) => Some(&cmd.common),
            Some(Command::Init) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory inside the project (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Locales directory relative to the project root (overrides config file)
    #[arg(long)]
    pub locales_root: Option<String>,

    /// Project name used as the cache key (overrides config file)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Quote style for inserted calls (overrides config file)
    #[arg(long, value_enum)]
    pub quote_style: Option<QuoteStyle>,

    /// Key cache file (defaults to the user cache directory)
    #[arg(long, env = "LOKEY_CACHE_FILE")]
    pub cache_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> ProjectOverrides {
        ProjectOverrides {
            locales_root: self.locales_root.clone(),
            project_name: self.project_name.clone(),
            quote_style: self.quote_style,
        }
    }
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Only show keys matching all of these terms (case-insensitive)
    pub query: Vec<String>,

    /// Re-scan translation files before listing
    #[arg(long)]
    pub refresh: bool,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RefreshCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RefreshFileCommand {
    /// The translation file that was saved
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InsertCommand {
    /// Selected entry (`key<separator>value`) or a bare key
    pub selection: String,

    /// File the call is inserted into
    #[arg(long)]
    pub file: PathBuf,

    /// Print snippet and cursor as JSON
    #[arg(long)]
    pub json: bool,

    /// Actually write the snippet into the file (default prints it)
    #[arg(long, requires = "offset")]
    pub apply: bool,

    /// Byte offset to insert at when using --apply
    #[arg(long)]
    pub offset: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List translation keys, using the cache and scanning on a miss
    Lookup(LookupCommand),
    /// Re-scan all translation files and rebuild the project cache
    Refresh(RefreshCommand),
    /// Update the cache after a translation file was saved
    RefreshFile(RefreshFileCommand),
    /// Print the t() call for a selected key
    Insert(InsertCommand),
    /// Initialize a new .lokeyrc.json configuration file
    Init,
    /// Start MCP server for editors and AI coding agents
    Serve,
}
