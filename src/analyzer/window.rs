use crate::domain::Commit;

/// Narrows the commit list to start at the commit with hash `start`.
///
/// Order is preserved. If no commit has that hash the whole list is returned.
pub fn commits_from<'a>(commits: &'a [Commit], start: &str) -> &'a [Commit] {
    if start.is_empty() {
        return commits;
    }

    match commits.iter().position(|commit| commit.hash == start) {
        Some(index) => &commits[index..],
        None => commits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<Commit> {
        ["c0", "c1", "c2", "c3"]
            .iter()
            .enumerate()
            .map(|(i, hash)| Commit::new(*hash, "dev", format!("commit {}", i), i as i64))
            .collect()
    }

    #[test]
    fn test_window_starts_at_hash() {
        let commits = history();
        let window = commits_from(&commits, "c2");
        let hashes: Vec<&str> = window.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["c2", "c3"]);
    }

    #[test]
    fn test_window_unknown_hash_keeps_all() {
        let commits = history();
        assert_eq!(commits_from(&commits, "nope").len(), 4);
    }

    #[test]
    fn test_window_empty_hash_keeps_all() {
        let commits = history();
        assert_eq!(commits_from(&commits, "").len(), 4);
    }

    #[test]
    fn test_window_first_commit() {
        let commits = history();
        assert_eq!(commits_from(&commits, "c0"), &commits[..]);
    }

    #[test]
    fn test_window_empty_history() {
        assert!(commits_from(&[], "c0").is_empty());
    }
}
