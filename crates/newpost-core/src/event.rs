//! Push event context resolved from the GitHub Actions environment

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// Fields of the push-event payload this system consumes
#[derive(Debug, Deserialize)]
struct PushPayload {
    /// SHA that was HEAD immediately before this push
    before: String,
}

/// Trigger-event state and repository coordinates for one invocation
///
/// Constructed once by the entry point and never mutated.
#[derive(Debug, Clone)]
pub struct PushContext {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Commit SHA being processed
    pub sha: String,
    /// SHA immediately preceding the push
    pub before: String,
    /// Full git ref (refs/heads/<branch>)
    pub git_ref: String,
    /// Server base URL (https://github.com on the public platform)
    pub server_url: String,
}

impl PushContext {
    /// Build the context from the standard Actions environment.
    ///
    /// Reads `GITHUB_REPOSITORY`, `GITHUB_SHA`, `GITHUB_REF`,
    /// `GITHUB_SERVER_URL` and the push payload at `GITHUB_EVENT_PATH`
    /// (for the pre-push `before` SHA).
    pub fn from_env() -> Result<Self> {
        let repository = std::env::var("GITHUB_REPOSITORY")
            .map_err(|_| Error::EventParse("GITHUB_REPOSITORY not set".to_string()))?;
        let (owner, repo) = split_repository(&repository)?;

        let sha = std::env::var("GITHUB_SHA")
            .map_err(|_| Error::EventParse("GITHUB_SHA not set".to_string()))?;
        let git_ref = std::env::var("GITHUB_REF")
            .map_err(|_| Error::EventParse("GITHUB_REF not set".to_string()))?;
        let server_url = std::env::var("GITHUB_SERVER_URL")
            .unwrap_or_else(|_| "https://github.com".to_string());

        let event_path = std::env::var("GITHUB_EVENT_PATH")
            .map_err(|_| Error::EventParse("GITHUB_EVENT_PATH not set".to_string()))?;
        let before = read_before_sha(Path::new(&event_path))?;

        Ok(Self {
            owner,
            repo,
            sha,
            before,
            git_ref,
            server_url,
        })
    }

    /// Short branch name: the ref with its `refs/heads/` prefix stripped
    pub fn branch(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&self.git_ref)
    }

    /// Canonical raw-content URL for a file at the pushed branch.
    ///
    /// The web host segment of the server URL is substituted with the
    /// raw-content host, then owner/repo/branch/path are joined.
    pub fn raw_content_url(&self, path: &str) -> String {
        let raw_host = self
            .server_url
            .replace("//github.com", "//raw.githubusercontent.com");
        format!(
            "{}/{}/{}/{}/{}",
            raw_host,
            self.owner,
            self.repo,
            self.branch(),
            path
        )
    }
}

/// Split `owner/repo` coordinates, rejecting malformed values
fn split_repository(repository: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = repository.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(Error::EventParse(format!(
            "Invalid GITHUB_REPOSITORY format: {}",
            repository
        )));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

/// Extract the `before` SHA from the push-event payload file
fn read_before_sha(event_path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(event_path).map_err(|e| {
        Error::EventParse(format!(
            "cannot read event payload {}: {}",
            event_path.display(),
            e
        ))
    })?;
    let payload: PushPayload = serde_json::from_str(&raw)
        .map_err(|e| Error::EventParse(format!("invalid push payload: {}", e)))?;
    Ok(payload.before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn context() -> PushContext {
        PushContext {
            owner: "octo".to_string(),
            repo: "blog".to_string(),
            sha: "a".repeat(40),
            before: "b".repeat(40),
            git_ref: "refs/heads/main".to_string(),
            server_url: "https://github.com".to_string(),
        }
    }

    #[test]
    fn test_branch_strips_heads_prefix() {
        let ctx = context();
        assert_eq!(ctx.branch(), "main");
    }

    #[test]
    fn test_branch_passes_through_other_refs() {
        let mut ctx = context();
        ctx.git_ref = "refs/tags/v1.0.0".to_string();
        assert_eq!(ctx.branch(), "refs/tags/v1.0.0");
    }

    #[test]
    fn test_raw_content_url_substitutes_host() {
        let ctx = context();
        assert_eq!(
            ctx.raw_content_url("blogs/blog-01.md"),
            "https://raw.githubusercontent.com/octo/blog/main/blogs/blog-01.md"
        );
    }

    #[test]
    fn test_raw_content_url_enterprise_host_unchanged() {
        // Substitution only applies to the public web host segment
        let mut ctx = context();
        ctx.server_url = "https://github.example.com".to_string();
        assert_eq!(
            ctx.raw_content_url("blogs/a.md"),
            "https://github.example.com/octo/blog/main/blogs/a.md"
        );
    }

    #[test]
    fn test_split_repository() {
        assert!(split_repository("octo/blog").is_ok());
        assert!(split_repository("invalid").is_err());
        assert!(split_repository("a/b/c").is_err());
        assert!(split_repository("/blog").is_err());
    }

    #[test]
    fn test_read_before_sha_from_payload() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"before":"0000000000000000000000000000000000000000","ref":"refs/heads/main"}}"#
        )
        .unwrap();
        let before = read_before_sha(f.path()).unwrap();
        assert_eq!(before, "0".repeat(40));
    }

    #[test]
    fn test_read_before_sha_rejects_malformed_payload() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();
        let err = read_before_sha(f.path()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::EventParse);
    }
}
