//! Core type definitions with zero-copy configuration

use std::borrow::Cow;

use crate::error::{Error, Result};

/// A single entry from the commit's changed-file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFile {
    /// Path relative to the repository root
    pub filename: String,
    /// Change status as reported by the platform (added, modified, ...)
    pub status: Option<String>,
}

/// Configuration input resolved once at startup
///
/// Fields borrow from the caller where possible (CLI argument storage),
/// falling back to owned strings for computed defaults.
#[derive(Debug, Clone)]
pub struct InputConfig<'a> {
    /// GitHub API credential (Actions input `gh_token`, required)
    pub token: Cow<'a, str>,
    /// Path prefix under which articles are expected (input `articles_folder`)
    pub articles_folder: Cow<'a, str>,
    /// GitHub API base URL
    pub api_url: Cow<'a, str>,
    /// Directory holding the checked-out repository
    pub workspace_dir: Cow<'a, str>,
}

impl<'a> Default for InputConfig<'a> {
    fn default() -> Self {
        Self {
            token: Cow::Borrowed(""),
            articles_folder: Cow::Borrowed(""),
            api_url: Cow::Borrowed("https://api.github.com"),
            workspace_dir: Cow::Borrowed("."),
        }
    }
}

impl<'a> InputConfig<'a> {
    /// Validate the configuration once, before any I/O
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(Error::Config("gh_token is required".to_string()));
        }
        if self.api_url.is_empty() {
            return Err(Error::Config("api_url must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Terminal state of one detection run
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A new article was found and parsed
    Published(PublishedArticle),
    /// The article already existed at the pre-push ref; nothing to emit
    AlreadyPublished {
        /// Path of the article that was skipped
        path: String,
    },
}

/// A newly detected article, parsed and ready for output emission
#[derive(Debug, Clone)]
pub struct PublishedArticle {
    /// Repository-relative path of the article file
    pub path: String,
    /// Canonical raw-content URL for the file
    pub file_url: String,
    /// Front-matter metadata
    pub metadata: serde_yaml::Mapping,
    /// Article body (everything after the front-matter block)
    pub body: String,
}

impl PublishedArticle {
    /// Serialize the front-matter mapping as a JSON object string
    pub fn metadata_json(&self) -> Result<String> {
        serde_json::to_string(&self.metadata)
            .map_err(|e| Error::Output(format!("metadata not representable as JSON: {}", e)))
    }
}
