//! GitHub REST API client for commit diffs and content existence probes

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::PlatformApi;
use crate::types::CommitFile;

/// GitHub API response for a single commit (one page of its file list)
#[derive(Debug, Deserialize)]
struct GitHubCommit {
    #[allow(dead_code)]
    sha: String,
    files: Option<Vec<GitHubCommitFile>>,
}

/// GitHub API commit file object
#[derive(Debug, Deserialize)]
struct GitHubCommitFile {
    filename: String,
    status: Option<String>,
}

/// Files per page when paginating the commit file list
const FILES_PER_PAGE: usize = 100;

/// Hard stop for runaway pagination
const MAX_PAGES: u32 = 100;

/// GitHub API client for commit and contents endpoints
pub struct GitHubApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for GitHubApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubApiClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GitHubApiClient {
    /// Create a new GitHub API client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("newpost/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
    }

    /// Fetch the changed-file list for a single commit.
    ///
    /// The commits endpoint pages its `files` array, so this loops until a
    /// short or empty page instead of trusting the 30-entry default.
    pub async fn commit_files(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<Vec<CommitFile>> {
        let url = format!(
            "{}/repos/{}/{}/commits/{}",
            self.base_url, owner, repo, reference
        );

        let mut all_files = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response = self
                .get(&url)
                .query(&[
                    ("page", page.to_string()),
                    ("per_page", FILES_PER_PAGE.to_string()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                debug!(status, %body, "commit diff request failed");
                return Err(Error::Api {
                    status,
                    message: format!("commit diff fetch failed for {}", reference),
                });
            }

            let commit: GitHubCommit = response
                .json()
                .await
                .map_err(|e| Error::Http(format!("invalid commit response: {}", e)))?;

            let files = commit.files.unwrap_or_default();
            let page_len = files.len();
            all_files.extend(files.into_iter().map(|f| CommitFile {
                filename: f.filename,
                status: f.status,
            }));

            if page_len < FILES_PER_PAGE {
                break;
            }

            page += 1;
            if page > MAX_PAGES {
                return Err(Error::Runtime(
                    "Too many pages in commit file list".to_string(),
                ));
            }
        }

        Ok(all_files)
    }

    /// Probe whether `path` exists in the repository at `reference`.
    ///
    /// Confirmed absence (HTTP 404) is `Ok(false)`; any other failure is
    /// an error so a transient outage is never mistaken for absence.
    pub async fn file_exists(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<bool> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url, owner, repo, path
        );

        let response = self.get(&url).query(&[("ref", reference)]).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), %body, "existence probe failed");
        Err(Error::Api {
            status: status.as_u16(),
            message: format!("existence probe failed for {}", path),
        })
    }
}

#[async_trait]
impl PlatformApi for GitHubApiClient {
    async fn commit_files(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<Vec<CommitFile>> {
        GitHubApiClient::commit_files(self, owner, repo, reference).await
    }

    async fn file_exists(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<bool> {
        GitHubApiClient::file_exists(self, owner, repo, path, reference).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_client_creation() {
        let client = GitHubApiClient::new("https://api.github.com", "t");
        assert_eq!(client.base_url, "https://api.github.com");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = GitHubApiClient::new("https://api.github.com", "ghs_secret");
        let repr = format!("{:?}", client);
        assert!(repr.contains("<redacted>"));
        assert!(!repr.contains("ghs_secret"));
    }

    #[test]
    fn test_commit_response_deserialization() {
        let raw = r#"{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "files": [
                {"filename": "blogs/blog-01.md", "status": "added", "additions": 10},
                {"filename": "readme.txt", "status": "modified"}
            ]
        }"#;
        let commit: GitHubCommit = serde_json::from_str(raw).unwrap();
        let files = commit.files.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "blogs/blog-01.md");
        assert_eq!(files[0].status.as_deref(), Some("added"));
    }

    #[test]
    fn test_commit_response_without_files_field() {
        // Merge commits can omit the files array entirely
        let raw = r#"{"sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e"}"#;
        let commit: GitHubCommit = serde_json::from_str(raw).unwrap();
        assert!(commit.files.is_none());
    }
}
