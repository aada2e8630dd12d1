use crate::domain::{Commit, Tag};
use crate::error::{Result, SemverGenError};
use git2::build::RepoBuilder;
use git2::{AutotagOption, Cred, FetchOptions, RemoteCallbacks, Repository as Git2Repo, Sort};
use std::fs;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a local git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            SemverGenError::repository(format!(
                "Unable to open local repository at '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Clone a single branch of a remote repository into `dest`, with all tags.
    ///
    /// Any existing directory at `dest` is removed first. HTTP credentials are
    /// taken from `GITHUB_USERNAME` and `GITHUB_TOKEN` when both are set.
    pub fn clone_remote(url: &str, branch: &str, dest: &Path) -> Result<Self> {
        if dest.exists() {
            fs::remove_dir_all(dest)?;
        }

        let mut callbacks = RemoteCallbacks::new();
        if let (Ok(username), Ok(token)) = (
            std::env::var("GITHUB_USERNAME"),
            std::env::var("GITHUB_TOKEN"),
        ) {
            callbacks.credentials(move |_url, _username_from_url, _allowed_types| {
                Cred::userpass_plaintext(&username, &token)
            });
        }

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        fetch_options.download_tags(AutotagOption::All);

        let repo = RepoBuilder::new()
            .branch(branch)
            .fetch_options(fetch_options)
            .clone(url, dest)
            .map_err(|e| {
                SemverGenError::repository(format!("Unable to clone repository '{}': {}", url, e))
            })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_commits(&self) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;

        revwalk
            .push_head()
            .map_err(|e| SemverGenError::repository(format!("Cannot resolve HEAD: {}", e)))?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let author = commit.author();

            commits.push(Commit {
                hash: oid.to_string(),
                author: author.to_string(),
                message: commit.message().unwrap_or("").to_string(),
                timestamp: author.when().seconds(),
            });
        }

        commits.sort_by_key(|commit| commit.timestamp);
        tracing::debug!("Listed {} commits", commits.len());
        Ok(commits)
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            match reference.peel_to_commit() {
                Ok(commit) => {
                    let hash = commit.id().to_string();
                    tracing::debug!(tag = name, %hash, "Found tag");
                    tags.push(Tag::new(name, hash));
                }
                Err(e) => {
                    tracing::debug!(tag = name, "Skipping tag not pointing at a commit: {}", e);
                }
            }
        }

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}
