//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two things the
//! version analyzer needs from a repository: its commit history and its tags.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use semver_gen::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> semver_gen::Result<()> {
//! let commits = repo.list_commits()?;
//! let tags = repo.list_tags()?;
//! println!("{} commits, {} tags", commits.len(), tags.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{Commit, Tag};
use crate::error::Result;

/// Read access to a repository's history
pub trait Repository {
    /// List every commit reachable from HEAD.
    ///
    /// Commits are ordered by author time, oldest first. Commits sharing a
    /// timestamp keep their topological order, so the result is stable.
    ///
    /// # Returns
    /// * `Ok(Vec<Commit>)` - Commits in chronological order
    /// * `Err` - If HEAD cannot be resolved or the history cannot be walked
    fn list_commits(&self) -> Result<Vec<Commit>>;

    /// List all tags that point (directly or through an annotated tag) at a
    /// commit, sorted by name.
    ///
    /// # Returns
    /// * `Ok(Vec<Tag>)` - Tags with the hash of the commit they reference
    /// * `Err` - If tags cannot be enumerated
    fn list_tags(&self) -> Result<Vec<Tag>>;
}
