/// A commit as supplied by the repository collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub message: String,
    /// Author time in seconds since the Unix epoch
    pub timestamp: i64,
}

impl Commit {
    /// Create a new commit
    pub fn new(
        hash: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Commit {
            hash: hash.into(),
            author: author.into(),
            message: message.into(),
            timestamp,
        }
    }

    /// Whitespace-separated words of the message
    pub fn tokens(&self) -> Vec<&str> {
        self.message.split_whitespace().collect()
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim_end()
    }
}
