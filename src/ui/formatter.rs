//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text, `display_*` functions print it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{Commit, Version};

const MAX_LISTED_COMMITS: usize = 10;
const MAX_SUMMARY_LEN: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning in yellow on stderr.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow(), warning);
}

/// The machine-readable result line.
pub fn format_version_line(version: &Version) -> String {
    format!("SEMVER {}", version)
}

/// Print the derived version on stdout.
pub fn display_version(version: &Version) {
    println!("{}", format_version_line(version));
}

/// Summarize the analyzed commits: a header plus up to 10 first lines.
pub fn format_commit_analysis(commits: &[Commit]) -> Vec<String> {
    let mut lines = vec![format!("Analyzed {} commits:", commits.len())];

    for (i, commit) in commits.iter().take(MAX_LISTED_COMMITS).enumerate() {
        let summary = commit.summary();
        let short: String = summary.chars().take(MAX_SUMMARY_LEN).collect();
        lines.push(format!("  {}. {}", i + 1, short));
    }

    if commits.len() > MAX_LISTED_COMMITS {
        lines.push(format!(
            "  ... and {} more commits",
            commits.len() - MAX_LISTED_COMMITS
        ));
    }

    lines
}

/// Print the commit summary on stderr so stdout stays machine-readable.
pub fn display_commit_analysis(commits: &[Commit]) {
    for line in format_commit_analysis(commits) {
        eprintln!("{}", line);
    }
}
