//! Report formatting and printing utilities.
//!
//! Data (key lists, snippets) goes to stdout so editors can consume it;
//! status messages and warnings go to stderr.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::json;

use super::commands::{
    CommandResult, CommandSummary, InsertSummary, LookupSummary, RefreshFileSummary,
    RefreshSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{FileRefresh, KeySource, extract::ScanWarning};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for warning in &result.cache_warnings {
        let _ = writeln!(
            err,
            "{} {} (starting with an empty cache)",
            "warning:".bold().yellow(),
            warning
        );
    }
    print_scan_warnings_to(&result.warnings, err);

    match &result.summary {
        CommandSummary::Lookup(summary) => print_lookup(summary, verbose, out, err),
        CommandSummary::Refresh(summary) => print_refresh(summary, err),
        CommandSummary::RefreshFile(summary) => print_refresh_file(summary, err),
        CommandSummary::Insert(summary) => print_insert(summary, out, err),
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    err,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            }
        }
    }
}

/// Print one warning per translation file that was skipped.
pub fn print_scan_warnings_to<W: Write>(warnings: &[ScanWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(
            writer,
            "{} {} (skipped)",
            "warning:".bold().yellow(),
            warning.error
        );
    }
}

fn print_lookup<O: Write, E: Write>(
    summary: &LookupSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if summary.json {
        let entries = json!(summary.matches);
        let _ = writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
    } else {
        for entry in &summary.matches {
            let _ = writeln!(out, "{}", entry.render(&summary.separator));
        }
    }

    if verbose {
        let source = match summary.source {
            KeySource::Cache => "cache",
            KeySource::Refreshed => "fresh scan",
        };
        let _ = writeln!(
            err,
            "{} {} of {} {} for {} (from {})",
            "info:".bold().cyan(),
            summary.matches.len(),
            summary.total_count,
            plural(summary.total_count, "key", "keys"),
            summary.project,
            source
        );
    }
}

fn print_refresh<E: Write>(summary: &RefreshSummary, err: &mut E) {
    let _ = writeln!(
        err,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Cached {} {} from {} locale {} for {}",
            summary.key_count,
            plural(summary.key_count, "key", "keys"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.project
        )
        .green()
    );
}

fn print_refresh_file<E: Write>(summary: &RefreshFileSummary, err: &mut E) {
    let file = summary.file.display();
    match &summary.outcome {
        FileRefresh::Updated { file_keys, total } => {
            let _ = writeln!(
                err,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Updated {} {} from {} ({} cached for {})",
                    file_keys,
                    plural(*file_keys, "key", "keys"),
                    file,
                    total,
                    summary.project
                )
                .green()
            );
        }
        FileRefresh::NoCache => {
            let _ = writeln!(
                err,
                "{} No cached keys for {} yet; run {} first",
                "info:".bold().cyan(),
                summary.project,
                "lokey refresh".cyan()
            );
        }
        FileRefresh::NotTranslationFile => {
            let _ = writeln!(
                err,
                "{} {} is not a translation file; cache unchanged",
                "info:".bold().cyan(),
                file
            );
        }
        FileRefresh::ParseFailed(reason) => {
            let _ = writeln!(
                err,
                "{} {}; cache unchanged",
                "info:".bold().cyan(),
                reason
            );
        }
    }
}

fn print_insert<O: Write, E: Write>(summary: &InsertSummary, out: &mut O, err: &mut E) {
    let insertion = &summary.insertion;
    match (&summary.applied, summary.json) {
        (Some((file, cursor)), true) => {
            let value = json!({
                "snippet": insertion.snippet,
                "cursor": insertion.cursor,
                "file": file.to_string_lossy(),
                "fileCursor": cursor,
            });
            let _ = writeln!(out, "{}", value);
        }
        (Some((file, cursor)), false) => {
            let _ = writeln!(
                err,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Inserted {} into {} (cursor at byte {})",
                    insertion.snippet,
                    file.display(),
                    cursor
                )
                .green()
            );
        }
        (None, true) => {
            let _ = writeln!(out, "{}", json!(insertion));
        }
        (None, false) => {
            let _ = writeln!(out, "{}", insertion.snippet);
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
