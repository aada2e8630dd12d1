//! Command-line plumbing shared by the binary: where the repository comes
//! from and the generate workflow.

pub mod orchestration;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::git::Git2Repository;

pub use orchestration::{run_generate, GenerateArgs, WorkflowResult};

/// Where the analyzed repository comes from
#[derive(Debug, Clone, PartialEq)]
pub enum RepositorySource {
    /// A repository discovered from a local path
    Local(PathBuf),
    /// A remote repository cloned (single branch) into a temporary directory
    Remote { url: String, branch: String },
}

/// Open or clone the repository described by `source`.
pub fn prepare_repository(source: &RepositorySource) -> Result<Git2Repository> {
    match source {
        RepositorySource::Local(path) => Git2Repository::open(path),
        RepositorySource::Remote { url, branch } => {
            let dest = clone_destination(&std::env::temp_dir(), url, branch);
            tracing::debug!("Cloning {} ({}) into {}", url, branch, dest.display());
            Git2Repository::clone_remote(url, branch, &dest)
        }
    }
}

/// `<base>/semver-gen/<url path>/<branch>`, keeping only safe path segments.
pub fn clone_destination(base: &Path, url: &str, branch: &str) -> PathBuf {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = without_scheme
        .split_once('/')
        .map(|(_, path)| path)
        .unwrap_or(without_scheme);

    let mut dest = base.join("semver-gen");
    for segment in path.split('/').chain(branch.split('/')) {
        let segment = segment.trim_end_matches(".git");
        if !segment.is_empty() && segment != "." && segment != ".." {
            dest.push(segment);
        }
    }
    dest
}
