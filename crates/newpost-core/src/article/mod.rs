//! Article candidate selection and content loading

pub mod front_matter;

pub use front_matter::ParsedArticle;

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::patterns::ArticleMatcher;
use crate::types::CommitFile;

/// The selected changed file, with its raw text loaded from the checkout
#[derive(Debug, Clone)]
pub struct ArticleCandidate {
    /// Repository-relative path
    pub path: String,
    /// Raw UTF-8 file content
    pub content: String,
}

/// Select the first matching markdown file and read it from the local
/// working copy.
///
/// The checkout at `workspace_dir` is assumed to be at the trigger
/// commit, so the platform's file list and the local tree agree.
pub async fn select_article(
    files: &[CommitFile],
    matcher: &ArticleMatcher,
    workspace_dir: &Path,
) -> Result<ArticleCandidate> {
    debug!(
        matched = matcher.count_matches(files),
        total = files.len(),
        "filtered commit file list"
    );

    let chosen = matcher.first_match(files).ok_or(Error::NoArticleFound)?;
    debug!(path = %chosen.filename, "using article candidate");

    let local_path = workspace_dir.join(&chosen.filename);
    let content = tokio::fs::read_to_string(&local_path)
        .await
        .map_err(|e| Error::FileRead(format!("{}: {}", local_path.display(), e)))?;

    Ok(ArticleCandidate {
        path: chosen.filename.clone(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    fn file(path: &str) -> CommitFile {
        CommitFile {
            filename: path.to_string(),
            status: Some("added".to_string()),
        }
    }

    #[tokio::test]
    async fn test_select_article_reads_local_content() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("blogs")).unwrap();
        std::fs::write(dir.path().join("blogs/blog-01.md"), "hello").unwrap();

        let matcher = ArticleMatcher::new("blogs").unwrap();
        let files = vec![file("readme.txt"), file("blogs/blog-01.md")];

        let candidate = select_article(&files, &matcher, dir.path()).await.unwrap();
        assert_eq!(candidate.path, "blogs/blog-01.md");
        assert_eq!(candidate.content, "hello");
    }

    #[tokio::test]
    async fn test_select_article_no_match() {
        let dir = TempDir::new().unwrap();
        let matcher = ArticleMatcher::new("blogs").unwrap();
        let files = vec![file("readme.txt")];

        let err = select_article(&files, &matcher, dir.path())
            .await
            .unwrap_err();
        assert_matches!(err, Error::NoArticleFound);
    }

    #[tokio::test]
    async fn test_select_article_missing_local_file() {
        // Listed by the platform but absent from the checkout
        let dir = TempDir::new().unwrap();
        let matcher = ArticleMatcher::new("blogs").unwrap();
        let files = vec![file("blogs/blog-01.md")];

        let err = select_article(&files, &matcher, dir.path())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileRead);
        assert!(err.message().contains("blog-01.md"));
    }
}
