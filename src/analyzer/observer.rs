//! Read-only event sink for tracing version derivation.

use std::fmt;

use crate::domain::{Commit, Tag, Version};

/// Wording category that triggers a version transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Major,
    Minor,
    Release,
    Patch,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Major => "major",
            Category::Minor => "minor",
            Category::Release => "release candidate",
            Category::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Something that happened while folding commits into a version
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent<'a> {
    /// The version was seeded from the most recent tagged commit
    ResumedFromTag {
        tag: &'a Tag,
        commit: &'a Commit,
        version: Version,
    },
    /// The most recent tag could not be read as `x.y.z`
    UnparsableTag { tag: &'a Tag },
    /// Non-strict mode bumped the patch number
    DefaultBump { commit: &'a Commit, version: Version },
    /// A keyword matched and its transition was applied
    Transition {
        commit: &'a Commit,
        category: Category,
        keyword: &'a str,
        version: Version,
    },
    /// A keyword matched but a blacklisted term suppressed it
    Vetoed {
        commit: &'a Commit,
        category: Category,
        keyword: &'a str,
        term: &'a str,
    },
}

/// Receives [`AnalysisEvent`]s. Implementations must not influence the result.
pub trait AnalysisObserver {
    fn on_event(&self, event: &AnalysisEvent<'_>);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {
    fn on_event(&self, _event: &AnalysisEvent<'_>) {}
}

/// Forwards events to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn on_event(&self, event: &AnalysisEvent<'_>) {
        match event {
            AnalysisEvent::ResumedFromTag {
                tag,
                commit,
                version,
            } => tracing::debug!(
                tag = %tag.name,
                commit = %commit.summary(),
                %version,
                "Found latest existing tag"
            ),
            AnalysisEvent::UnparsableTag { tag } => tracing::debug!(
                tag = %tag.name,
                "Unable to parse incompatible semver (non x.y.z)"
            ),
            AnalysisEvent::DefaultBump { commit, version } => tracing::debug!(
                commit = %commit.summary(),
                %version,
                "Incrementing patch (DEFAULT)"
            ),
            AnalysisEvent::Transition {
                commit,
                category,
                keyword,
                version,
            } => tracing::debug!(
                commit = %commit.summary(),
                keyword,
                %version,
                "Incrementing {} (WORDING)",
                category
            ),
            AnalysisEvent::Vetoed {
                commit,
                category,
                keyword,
                term,
            } => tracing::debug!(
                commit = %commit.summary(),
                keyword,
                blacklist_term = term,
                "Blacklisted term detected, ignoring {} match",
                category
            ),
        }
    }
}
