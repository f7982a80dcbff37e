use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but found nothing (e.g. no matching keys)
/// - `Error` (2): Command failed (config error, unreadable file, interrupted scan, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        match &result.summary {
            CommandSummary::Lookup(summary) if summary.matches.is_empty() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
