use std::fmt;

use super::tag::strip_tag_prefix;

const RC_MARKER: &str = "-rc.";

/// Semantic version accumulator with an optional release-candidate counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub release: u64,
    pub release_candidate: bool,
}

impl Version {
    /// Create a new version without a release-candidate suffix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            release: 0,
            release_candidate: false,
        }
    }

    /// Create a release-candidate version (`major.minor.patch-rc.release`)
    pub fn release_candidate(major: u64, minor: u64, patch: u64, release: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            release,
            release_candidate: true,
        }
    }

    /// Parse the version encoded in a tag name.
    ///
    /// The tag prefix is stripped first (see [`strip_tag_prefix`]). A `-rc.N`
    /// suffix sets the release counter. Each of the first three dot-separated
    /// parts contributes its first digit run, or 0 when it has none.
    ///
    /// Returns `None` when fewer than three dot-separated parts remain.
    ///
    /// # Example
    /// ```
    /// use semver_gen::domain::Version;
    ///
    /// let v = Version::try_parse_existing("app-1.2.5-rc.7", &["app-".to_string()]).unwrap();
    /// assert_eq!(v.to_string(), "1.2.5-rc.7");
    /// assert_eq!(Version::try_parse_existing("1.2", &[]), None);
    /// ```
    pub fn try_parse_existing(tag: &str, prefixes: &[String]) -> Option<Self> {
        let stripped = strip_tag_prefix(tag, prefixes);

        let (core, release) = match stripped.find(RC_MARKER) {
            Some(pos) => (
                &stripped[..pos],
                Some(leading_number(&stripped[pos + RC_MARKER.len()..])),
            ),
            None => (stripped, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() < 3 {
            return None;
        }

        Some(Version {
            major: first_number(parts[0]),
            minor: first_number(parts[1]),
            patch: first_number(parts[2]),
            release: release.unwrap_or(0),
            release_candidate: release.is_some(),
        })
    }

    /// Parse a tag's version, falling back to `current` when the tag is not
    /// in `x.y.z` form.
    ///
    /// A successful parse replaces `current` entirely.
    pub fn parse_existing(tag: &str, current: Version, prefixes: &[String]) -> Self {
        Self::try_parse_existing(tag, prefixes).unwrap_or(current)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.release_candidate {
            write!(f, "-rc.{}", self.release)?;
        }
        Ok(())
    }
}

/// Parse the digit run at the very start of `s`, 0 if there is none or it
/// does not fit in a `u64`.
pub fn leading_number(s: &str) -> u64 {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}

/// Parse the first digit run anywhere in `s`, 0 if there is none.
fn first_number(s: &str) -> u64 {
    match s.find(|c: char| c.is_ascii_digit()) {
        Some(start) => leading_number(&s[start..]),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(
            Version::release_candidate(1, 3, 7, 2).to_string(),
            "1.3.7-rc.2"
        );
    }

    #[test]
    fn test_version_display_ignores_release_without_flag() {
        let v = Version {
            release: 4,
            ..Version::new(0, 0, 1)
        };
        assert_eq!(v.to_string(), "0.0.1");
    }

    #[test]
    fn test_parse_plain() {
        let v = Version::parse_existing("2.0.0", Version::default(), &[]);
        assert_eq!(v, Version::new(2, 0, 0));
    }

    #[test]
    fn test_parse_v_prefix() {
        let v = Version::parse_existing("v1.2.3", Version::default(), &[]);
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_release_candidate_round_trip() {
        let v = Version::parse_existing("1.2.5-rc.7", Version::default(), &[]);
        assert_eq!(v, Version::release_candidate(1, 2, 5, 7));
        assert_eq!(v.to_string(), "1.2.5-rc.7");
    }

    #[test]
    fn test_parse_configured_prefix() {
        let v = Version::parse_existing("app-0.0.16", Version::default(), &prefixes(&["app-"]));
        assert_eq!(v, Version::new(0, 0, 16));
    }

    #[test]
    fn test_parse_prefixed_release_candidate() {
        let v = Version::parse_existing(
            "infra-3.4.5-rc.2",
            Version::default(),
            &prefixes(&["app-", "infra-"]),
        );
        assert_eq!(v, Version::release_candidate(3, 4, 5, 2));
    }

    #[test]
    fn test_parse_too_few_parts_keeps_current() {
        let current = Version::release_candidate(9, 8, 7, 6);
        assert_eq!(Version::parse_existing("1.2", current, &[]), current);
        assert_eq!(Version::parse_existing("latest", current, &[]), current);
        assert_eq!(Version::parse_existing("", current, &[]), current);
    }

    #[test]
    fn test_parse_independent_of_seed() {
        let a = Version::parse_existing("4.5.6-rc.1", Version::default(), &[]);
        let b = Version::parse_existing("4.5.6-rc.1", Version::release_candidate(1, 1, 1, 1), &[]);
        assert_eq!(a, b);

        let c = Version::parse_existing("4.5.6", Version::release_candidate(1, 1, 1, 1), &[]);
        assert_eq!(c, Version::new(4, 5, 6));
    }

    #[test]
    fn test_parse_non_numeric_parts_default_to_zero() {
        let v = Version::parse_existing("x.y.z", Version::new(5, 5, 5), &[]);
        assert_eq!(v, Version::new(0, 0, 0));
    }

    #[test]
    fn test_parse_digits_surrounded_by_text() {
        let v = Version::parse_existing("release1.beta2.3final", Version::default(), &[]);
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_extra_parts_ignored() {
        let v = Version::parse_existing("1.2.3.4", Version::default(), &[]);
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_rc_without_digits() {
        let v = Version::parse_existing("1.0.0-rc.next", Version::default(), &[]);
        assert_eq!(v, Version::release_candidate(1, 0, 0, 0));
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("16"), 16);
        assert_eq!(leading_number("7-hotfix"), 7);
        assert_eq!(leading_number("abc"), 0);
        assert_eq!(leading_number(""), 0);
        assert_eq!(leading_number("99999999999999999999"), 0);
        assert_eq!(leading_number("4294967296"), 4_294_967_296);
    }

    #[test]
    fn test_parse_components_beyond_32_bits() {
        let v = Version::parse_existing("1.2.4294967296", Version::default(), &[]);
        assert_eq!(v, Version::new(1, 2, 4_294_967_296));
        assert_eq!(v.to_string(), "1.2.4294967296");
    }
}
