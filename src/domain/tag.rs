/// A git tag and the commit it points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub hash: String,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, hash: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            hash: hash.into(),
        }
    }
}

/// Strip a version prefix from a tag name.
///
/// A leading `v` immediately followed by a digit is always removed. Otherwise
/// the first entry of `prefixes` that the tag starts with is removed. At most
/// one prefix is ever stripped.
///
/// # Example
/// ```
/// use semver_gen::domain::strip_tag_prefix;
///
/// assert_eq!(strip_tag_prefix("v1.2.3", &[]), "1.2.3");
/// assert_eq!(strip_tag_prefix("version-1.0.0", &[]), "version-1.0.0");
/// assert_eq!(strip_tag_prefix("app-0.0.16", &["app-".to_string()]), "0.0.16");
/// ```
pub fn strip_tag_prefix<'a>(tag: &'a str, prefixes: &[String]) -> &'a str {
    if let Some(rest) = tag.strip_prefix('v') {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            return rest;
        }
    }

    prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .find_map(|prefix| tag.strip_prefix(prefix.as_str()))
        .unwrap_or(tag)
}
