use crate::analyzer::observer::{AnalysisEvent, AnalysisObserver, Category, NoopObserver};
use crate::config::{Config, WordingConfig};
use crate::domain::{Commit, Tag, Version};
use crate::matcher::{KeywordMatcher, MatchOutcome};

/// Transitions in priority order. The first category whose wording matches a
/// commit is applied and the rest are skipped.
const TRANSITIONS: [(Category, fn(Version) -> Version); 4] = [
    (Category::Major, bump_major),
    (Category::Minor, bump_minor),
    (Category::Release, bump_release),
    (Category::Patch, bump_patch),
];

fn bump_major(v: Version) -> Version {
    Version::new(v.major.saturating_add(1), 0, 1)
}

fn bump_minor(v: Version) -> Version {
    Version::new(v.major, v.minor.saturating_add(1), 1)
}

fn bump_release(v: Version) -> Version {
    Version::release_candidate(v.major, v.minor, 1, v.release.saturating_add(1))
}

fn bump_patch(v: Version) -> Version {
    Version {
        patch: v.patch.saturating_add(1),
        ..v
    }
}

fn keywords(wording: &WordingConfig, category: Category) -> &[String] {
    match category {
        Category::Major => &wording.major,
        Category::Minor => &wording.minor,
        Category::Release => &wording.release,
        Category::Patch => &wording.patch,
    }
}

/// Result of folding a commit history into a version
#[derive(Debug, Clone, PartialEq)]
pub struct VersionAnalysis {
    pub version: Version,
    /// Tag the fold resumed after, when existing tags were respected
    pub resumed_from: Option<Tag>,
    /// Number of commits that went through the fold
    pub commits_analyzed: usize,
}

/// Derives a version from commit messages
pub struct VersionAnalyzer<'o> {
    wording: WordingConfig,
    blacklist: Vec<String>,
    tag_prefixes: Vec<String>,
    respect_existing: bool,
    strict: bool,
    matcher: KeywordMatcher,
    observer: &'o dyn AnalysisObserver,
}

impl VersionAnalyzer<'static> {
    /// Create an analyzer from configuration.
    ///
    /// Strict mode and respect-existing start from `force.strict` and
    /// `force.existing`.
    pub fn new(config: &Config) -> Self {
        VersionAnalyzer {
            wording: config.wording.clone(),
            blacklist: config.blacklist.clone(),
            tag_prefixes: config.tag_prefixes.clone(),
            respect_existing: config.force.existing,
            strict: config.force.strict,
            matcher: KeywordMatcher::new(),
            observer: &NoopObserver,
        }
    }
}

impl<'o> VersionAnalyzer<'o> {
    /// Report analysis events to `observer`
    pub fn with_observer<'a>(self, observer: &'a dyn AnalysisObserver) -> VersionAnalyzer<'a> {
        VersionAnalyzer {
            wording: self.wording,
            blacklist: self.blacklist,
            tag_prefixes: self.tag_prefixes,
            respect_existing: self.respect_existing,
            strict: self.strict,
            matcher: self.matcher,
            observer,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn respect_existing(mut self, respect_existing: bool) -> Self {
        self.respect_existing = respect_existing;
        self
    }

    /// Fold `commits` (oldest first) into a version starting from `initial`.
    pub fn calculate(&mut self, commits: &[Commit], tags: &[Tag], initial: Version) -> Version {
        self.analyze(commits, tags, initial).version
    }

    /// Fold `commits` (oldest first) into a version starting from `initial`.
    ///
    /// When respecting existing tags, the fold starts right after the most
    /// recent tagged commit, seeded with that tag's version. A tag that is
    /// not in `x.y.z` form leaves `initial` in place.
    pub fn analyze(
        &mut self,
        commits: &[Commit],
        tags: &[Tag],
        initial: Version,
    ) -> VersionAnalysis {
        let mut version = initial;
        let mut start = 0;
        let mut resumed_from = None;

        if self.respect_existing && !tags.is_empty() {
            if let Some((index, tag)) = latest_tagged_commit(commits, tags) {
                match Version::try_parse_existing(&tag.name, &self.tag_prefixes) {
                    Some(parsed) => {
                        version = parsed;
                        self.observer.on_event(&AnalysisEvent::ResumedFromTag {
                            tag,
                            commit: &commits[index],
                            version,
                        });
                    }
                    None => self
                        .observer
                        .on_event(&AnalysisEvent::UnparsableTag { tag }),
                }
                start = index + 1;
                resumed_from = Some(tag.clone());
            }
        }

        let remaining = &commits[start..];
        let version = remaining
            .iter()
            .fold(version, |version, commit| self.apply_commit(version, commit));

        VersionAnalysis {
            version,
            resumed_from,
            commits_analyzed: remaining.len(),
        }
    }

    /// One step of the fold: the default bump (non-strict only) followed by
    /// at most one keyword transition.
    pub fn apply_commit(&mut self, mut version: Version, commit: &Commit) -> Version {
        if !self.strict {
            version.patch = version.patch.saturating_add(1);
            self.observer
                .on_event(&AnalysisEvent::DefaultBump { commit, version });
        }

        let tokens = commit.tokens();
        for (category, transition) in TRANSITIONS {
            let targets = keywords(&self.wording, category);
            match self.matcher.classify(&tokens, targets, &self.blacklist) {
                MatchOutcome::Matched { keyword } => {
                    let version = transition(version);
                    self.observer.on_event(&AnalysisEvent::Transition {
                        commit,
                        category,
                        keyword: &keyword,
                        version,
                    });
                    return version;
                }
                MatchOutcome::Vetoed { keyword, term } => {
                    self.observer.on_event(&AnalysisEvent::Vetoed {
                        commit,
                        category,
                        keyword: &keyword,
                        term: &term,
                    });
                }
                MatchOutcome::NoMatch => {}
            }
        }

        version
    }
}

/// The most recent commit carrying a tag, with the first tag (in list order)
/// pointing at it.
fn latest_tagged_commit<'a>(commits: &[Commit], tags: &'a [Tag]) -> Option<(usize, &'a Tag)> {
    commits.iter().enumerate().rev().find_map(|(index, commit)| {
        tags.iter()
            .find(|tag| tag.hash == commit.hash)
            .map(|tag| (index, tag))
    })
}
