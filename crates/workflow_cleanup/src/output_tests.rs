use super::*;
use secrecy::SecretString;

fn summary(mode: CleanupMode, qualifying: usize, processed: usize) -> CleanupSummary {
    CleanupSummary {
        mode,
        pages_fetched: 1,
        runs_inspected: qualifying + 1,
        runs_qualifying: qualifying,
        runs_processed: processed,
    }
}

#[test]
fn test_format_dry_run_warning() {
    assert!(format_dry_run_warning().contains("This is a dry run, no changes will be made."));
}

#[test]
fn test_format_header_does_not_show_token() {
    let config = CleanupConfig {
        github_token: SecretString::from("ghp_secret_value".to_string()),
        organization: "acme".to_string(),
        repository: "widgets".to_string(),
    };

    let output = format_header(&config, 15);

    assert!(output.contains("acme/widgets"));
    assert!(output.contains("15 days"));
    assert!(!output.contains("ghp_secret_value"));
}

#[test]
fn test_format_summary_dry_run() {
    let output = format_summary(&summary(CleanupMode::DryRun, 1, 1));

    assert!(output.contains("1 workflows would have been deleted."));
    assert!(!output.contains("could not be deleted"));
}

#[test]
fn test_format_summary_reports_failed_deletions() {
    let output = format_summary(&summary(CleanupMode::Delete, 3, 1));

    assert!(output.contains("1 workflows deleted successfully."));
    assert!(output.contains("2 expired workflows could not be deleted."));
}

#[test]
fn test_format_summary_all_deleted() {
    let output = format_summary(&summary(CleanupMode::Delete, 2, 2));

    assert!(output.contains("2 workflows deleted successfully."));
    assert!(!output.contains("could not be deleted"));
}
