//! Main workflow orchestration logic
//!
//! Wires the repository collaborator, the configuration and the version
//! analyzer together. Kept separate from the binary so the workflow can be
//! called programmatically without depending on clap.

use crate::analyzer::{commits_from, AnalysisObserver, VersionAnalyzer};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{Commit, Version};
use crate::error::Result;
use crate::git::Repository;

/// Arguments for the generate workflow
///
/// Flags set here are OR-ed with the matching `force` settings of the
/// configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateArgs {
    /// Only keyword matches move the version
    pub strict: bool,

    /// Resume from the most recent tagged commit
    pub existing: bool,
}

/// Result of a successful generate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The derived version
    pub version: Version,

    /// Commits that went through the analysis, oldest first
    pub commits: Vec<Commit>,

    /// Name of the tag the analysis resumed after
    pub resumed_from_tag: Option<String>,

    /// Non-fatal conditions worth reporting
    pub warnings: Vec<BoundaryWarning>,
}

/// Generate workflow
///
/// 1. List commits and narrow them to the configured start commit
/// 2. List tags when existing tags are respected
/// 3. Apply forced versions and fold the commits into a version
///
/// # Returns
///
/// The derived version with the analyzed commits, or an error if the
/// repository could not be read.
pub fn run_generate<R: Repository>(
    repo: &R,
    args: &GenerateArgs,
    config: &Config,
    observer: &dyn AnalysisObserver,
) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();

    let all_commits = repo.list_commits()?;
    let commits = match config.force.start_commit() {
        Some(start) => {
            if !all_commits.iter().any(|commit| commit.hash == start) {
                warnings.push(BoundaryWarning::StartCommitNotFound {
                    commit: start.to_string(),
                });
            }
            commits_from(&all_commits, start)
        }
        None => &all_commits[..],
    };

    if commits.is_empty() {
        warnings.push(BoundaryWarning::NoCommits);
    }

    let respect_existing = args.existing || config.force.existing;
    let strict = args.strict || config.force.strict;
    let tags = if respect_existing {
        repo.list_tags()?
    } else {
        Vec::new()
    };

    let mut analyzer = VersionAnalyzer::new(config)
        .strict(strict)
        .respect_existing(respect_existing)
        .with_observer(observer);
    let analysis = analyzer.analyze(commits, &tags, config.initial_version());

    match &analysis.resumed_from {
        Some(tag) => {
            if Version::try_parse_existing(&tag.name, &config.tag_prefixes).is_none() {
                warnings.push(BoundaryWarning::UnparsableTag {
                    tag: tag.name.clone(),
                });
            }
        }
        None if !tags.is_empty() => warnings.push(BoundaryWarning::NoTaggedCommit {
            tags_found: tags.len(),
        }),
        None => {}
    }

    let analyzed = commits[commits.len() - analysis.commits_analyzed..].to_vec();

    Ok(WorkflowResult {
        version: analysis.version,
        commits: analyzed,
        resumed_from_tag: analysis.resumed_from.map(|tag| tag.name),
        warnings,
    })
}
