//! Detection pipeline coordinator

use std::path::Path;

use tracing::debug;

use crate::article::{self, front_matter};
use crate::error::Result;
use crate::event::PushContext;
use crate::patterns::ArticleMatcher;
use crate::traits::PlatformApi;
use crate::types::{InputConfig, Outcome, PublishedArticle};

/// Detector that runs the linear publication-detection procedure
pub struct ArticleDetector<'a, A: PlatformApi> {
    api: &'a A,
    config: &'a InputConfig<'a>,
    ctx: &'a PushContext,
}

impl<'a, A: PlatformApi> ArticleDetector<'a, A> {
    /// Create a new detector
    pub fn new(api: &'a A, config: &'a InputConfig<'a>, ctx: &'a PushContext) -> Self {
        Self { api, config, ctx }
    }

    /// Main detection pipeline.
    ///
    /// Strictly sequential: each of the three I/O steps depends on the
    /// previous step's result.
    pub async fn detect(&self) -> Result<Outcome> {
        self.config.validate()?;

        // Step 1: changed-file list for the trigger commit
        let files = self
            .api
            .commit_files(&self.ctx.owner, &self.ctx.repo, &self.ctx.sha)
            .await?;

        // Step 2: filter to the watched folder, select first match, read
        // it from the checkout
        let matcher = ArticleMatcher::new(&self.config.articles_folder)?;
        let workspace = Path::new(self.config.workspace_dir.as_ref());
        let candidate = article::select_article(&files, &matcher, workspace).await?;

        // Step 3: pre-existence check against the pre-push ref
        let existed = self
            .api
            .file_exists(
                &self.ctx.owner,
                &self.ctx.repo,
                &candidate.path,
                &self.ctx.before,
            )
            .await?;
        if existed {
            debug!(path = %candidate.path, "article already published, skipping");
            return Ok(Outcome::AlreadyPublished {
                path: candidate.path,
            });
        }

        // Step 4: canonical source URL + front-matter split
        let file_url = self.ctx.raw_content_url(&candidate.path);
        debug!(%file_url, "computed raw content URL");

        let parsed = front_matter::parse(&candidate.content)?;
        debug!(
            keys = parsed.metadata.len(),
            body_bytes = parsed.body.len(),
            "parsed front matter"
        );

        Ok(Outcome::Published(PublishedArticle {
            path: candidate.path,
            file_url,
            metadata: parsed.metadata,
            body: parsed.body,
        }))
    }
}
