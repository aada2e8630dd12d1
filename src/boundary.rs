use std::fmt;

/// Non-fatal conditions met at the edges of the analyzed history.
/// The version is still produced; these are reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository history is empty, the initial version is returned as-is
    NoCommits,
    /// The configured start commit is not in the history, all commits are used
    StartCommitNotFound { commit: String },
    /// The most recent tag cannot be read as `x.y.z`
    UnparsableTag { tag: String },
    /// Existing tags were requested but none points into the analyzed history
    NoTaggedCommit { tags_found: usize },
}

fn short_hash(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoCommits => write!(f, "No commits found in repository history"),
            BoundaryWarning::StartCommitNotFound { commit } => write!(
                f,
                "Start commit '{}' not found, analyzing full history",
                short_hash(commit)
            ),
            BoundaryWarning::UnparsableTag { tag } => write!(
                f,
                "Cannot parse tag '{}': expected x.y.z, keeping current version",
                tag
            ),
            BoundaryWarning::NoTaggedCommit { tags_found } => write!(
                f,
                "None of the {} existing tags points at an analyzed commit, starting from scratch",
                tags_found
            ),
        }
    }
}
