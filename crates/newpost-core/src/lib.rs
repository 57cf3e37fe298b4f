//! # NewPost Core
//!
//! Markdown article publication detection for GitHub Actions push events.
//!
//! Given a push to a branch, this library runs one linear procedure:
//! fetch the trigger commit's changed-file list, filter it to markdown
//! files under a watched folder, read the first match from the local
//! checkout, check whether the file already existed at the pre-push ref,
//! and split a new article into front-matter metadata and body for
//! downstream workflow steps.
//!
//! ## Example
//!
//! ```no_run
//! use newpost_core::{detect_article, InputConfig, Outcome, PushContext};
//! use std::borrow::Cow;
//!
//! # async fn example() -> newpost_core::Result<()> {
//! let config = InputConfig {
//!     token: Cow::Borrowed("ghs_example"),
//!     articles_folder: Cow::Borrowed("blogs"),
//!     ..Default::default()
//! };
//!
//! let ctx = PushContext::from_env()?;
//! match detect_article(&config, &ctx).await? {
//!     Outcome::Published(article) => println!("new article: {}", article.path),
//!     Outcome::AlreadyPublished { path } => println!("{path} already published"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod article;
pub mod detector;
pub mod error;
pub mod event;
pub mod http;
pub mod output;
pub mod patterns;
pub mod traits;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use event::PushContext;
pub use types::{CommitFile, InputConfig, Outcome, PublishedArticle};

/// Detect a newly published article for the current push event
///
/// This is the main entry point for the library. It handles:
/// - Commit diff retrieval (paginated)
/// - Folder/markdown filtering and first-match selection
/// - Local content read
/// - Pre-existence check at the pre-push ref
/// - Front-matter parsing
///
/// Returns [`Outcome::AlreadyPublished`] when the selected file already
/// existed before the push, otherwise [`Outcome::Published`] with the
/// parsed article.
pub async fn detect_article(config: &InputConfig<'_>, ctx: &PushContext) -> Result<Outcome> {
    let client = http::GitHubApiClient::new(config.api_url.as_ref(), config.token.as_ref());
    let detector = detector::ArticleDetector::new(&client, config, ctx);
    detector.detect().await
}

/// Synchronous variant of `detect_article`
///
/// This creates a new Tokio runtime and blocks on the async version.
/// Prefer the async version if you're already in an async context.
pub fn detect_article_sync(config: &InputConfig<'_>, ctx: &PushContext) -> Result<Outcome> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Error::Runtime(e.to_string()))?
        .block_on(detect_article(config, ctx))
}
