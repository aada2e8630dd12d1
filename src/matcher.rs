//! Keyword matching of commit messages against wording categories.
//!
//! A keyword matches when it appears in the message as a case-insensitive
//! substring, or when it fuzzy-matches a single word of the message (its
//! characters occur in order, ignoring case and diacritics). A match is vetoed
//! when the message contains any blacklisted term.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Matcher, Utf32String};

/// Outcome of checking one message against one keyword list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No keyword matched
    NoMatch,
    /// `keyword` matched and nothing vetoed it
    Matched { keyword: String },
    /// `keyword` matched but the message contains the blacklisted `term`
    Vetoed { keyword: String, term: String },
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// Fuzzy keyword matcher backed by nucleo-matcher
pub struct KeywordMatcher {
    matcher: Matcher,
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Returns true when a keyword from `targets` matches `tokens` and no
    /// `blacklist` term occurs in the message.
    pub fn check_matches(
        &mut self,
        tokens: &[&str],
        targets: &[String],
        blacklist: &[String],
    ) -> bool {
        self.classify(tokens, targets, blacklist).is_match()
    }

    /// Like [`check_matches`](Self::check_matches), but reports which keyword
    /// matched and which term vetoed it.
    ///
    /// Targets are scanned in order and scanning stops at the first match.
    ///
    /// Keywords and blacklist terms that are empty or only whitespace are
    /// skipped. Taken literally they would be a substring of every message,
    /// so an empty keyword would match everything and an empty blacklist term
    /// would veto everything.
    pub fn classify(
        &mut self,
        tokens: &[&str],
        targets: &[String],
        blacklist: &[String],
    ) -> MatchOutcome {
        let content = tokens.join(" ");
        let content_lower = content.to_lowercase();

        let keyword = targets
            .iter()
            .filter(|target| !target.trim().is_empty())
            .find(|target| self.keyword_matches(target, tokens, &content_lower));

        let Some(keyword) = keyword else {
            return MatchOutcome::NoMatch;
        };

        let veto = blacklist
            .iter()
            .filter(|term| !term.trim().is_empty())
            .find(|term| content_lower.contains(&term.to_lowercase()));

        match veto {
            Some(term) => MatchOutcome::Vetoed {
                keyword: keyword.clone(),
                term: term.clone(),
            },
            None => MatchOutcome::Matched {
                keyword: keyword.clone(),
            },
        }
    }

    fn keyword_matches(&mut self, keyword: &str, tokens: &[&str], content_lower: &str) -> bool {
        if content_lower.contains(&keyword.to_lowercase()) {
            return true;
        }

        let atom = Atom::new(
            keyword,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );

        tokens.iter().any(|token| {
            let haystack = Utf32String::from(*token);
            atom.score(haystack.slice(..), &mut self.matcher).is_some()
        })
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}
