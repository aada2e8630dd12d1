//! User interface module - terminal output.
//!
//! The derived version goes to stdout, everything else to stderr, so the
//! output can be captured by scripts.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_commit_analysis, display_error, display_status,
    display_version, format_commit_analysis, format_version_line,
};
