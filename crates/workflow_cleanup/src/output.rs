//! Terminal output for the `workflow-cleanup` binary.

use colored::Colorize;

use crate::{CleanupConfig, CleanupMode, CleanupSummary};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Warning printed before a dry run starts.
pub fn format_dry_run_warning() -> String {
    format!(
        "{} This is a dry run, no changes will be made.",
        "[WARNING]".yellow().bold()
    )
}

/// Repository and retention threshold the run targets. Never shows the token.
pub fn format_header(config: &CleanupConfig, max_age_days: i64) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Workflow Run Cleanup".bold()));
    output.push_str(&format!(
        "{}: {}/{}\n",
        "Repository".bold(),
        config.organization,
        config.repository
    ));
    output.push_str(&format!("{}: {} days", "Max age".bold(), max_age_days));
    output
}

/// Notice printed before the first page is fetched.
pub fn format_processing() -> String {
    format!("{} Processing workflows...", "[INFO]".bright_cyan().bold())
}

/// Final result line, plus a warning when some expired runs were not deleted.
pub fn format_summary(summary: &CleanupSummary) -> String {
    let mut output = format!("{} {}", "[OK]".green().bold(), summary.message());

    if summary.mode == CleanupMode::Delete && summary.runs_processed < summary.runs_qualifying {
        output.push_str(&format!(
            "\n{} {} expired workflows could not be deleted.",
            "[WARNING]".yellow().bold(),
            summary.runs_qualifying - summary.runs_processed
        ));
    }

    output
}
