// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored status lines for the cli

use crate::models::{RunState, RunSummary};
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the `verbose` flag when set.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

/// One line per run outcome, e.g. `12 of 12 rows, 10 found, 2 not found`.
pub fn format_summary(summary: &RunSummary) -> String {
    let counts = format!(
        "{} of {} rows, {} found, {} not found",
        summary.processed, summary.total, summary.found, summary.not_found
    );

    match summary.state {
        RunState::Completed if summary.malformed.is_empty() => format_success(&counts),
        RunState::Completed => format_warning(&format!(
            "{}, {} malformed rows skipped",
            counts,
            summary.malformed.len()
        )),
        RunState::Cancelled => format_warning(&format!("Cancelled: {}", counts)),
        RunState::Failed => format_error(&format!("Failed: {}", counts)),
        RunState::Idle | RunState::Running => format_info(&counts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MalformedRow;

    #[test]
    fn test_format_summary_mentions_counts() {
        colored::control::set_override(false);

        let mut summary = RunSummary::new(3);
        summary.state = RunState::Completed;
        summary.processed = 3;
        summary.found = 2;
        summary.not_found = 1;

        assert_eq!(
            format_summary(&summary),
            "✓ 3 of 3 rows, 2 found, 1 not found"
        );

        summary.malformed.push(MalformedRow {
            line: 4,
            fields: 2,
            required: 6,
        });
        assert!(format_summary(&summary).contains("1 malformed rows skipped"));

        summary.state = RunState::Cancelled;
        assert!(format_summary(&summary).starts_with("⚠ Cancelled"));
    }
}
