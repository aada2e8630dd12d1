use crate::domain::{Commit, Tag};
use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default, Clone)]
pub struct MockRepository {
    commits: Vec<Commit>,
    tags: Vec<Tag>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit to the mock repository
    pub fn add_commit(&mut self, commit: Commit) {
        self.commits.push(commit);
    }

    /// Add a tag pointing to a commit hash
    pub fn add_tag(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        self.tags.push(Tag::new(name, hash));
    }
}

impl Repository for MockRepository {
    fn list_commits(&self) -> Result<Vec<Commit>> {
        let mut commits = self.commits.clone();
        commits.sort_by_key(|commit| commit.timestamp);
        Ok(commits)
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        let mut tags = self.tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}
