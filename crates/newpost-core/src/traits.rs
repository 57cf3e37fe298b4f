//! Hosting-platform seam for the detection pipeline
//!
//! The detector talks to the platform through this trait so the pipeline
//! can run against a stub in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::CommitFile;

/// Read-only hosting-platform operations the detector depends on
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// List the files changed by the commit at `reference`
    async fn commit_files(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<Vec<CommitFile>>;

    /// Whether `path` exists in the repository as of `reference`.
    ///
    /// `Ok(false)` means the platform explicitly reported not-found; any
    /// other failure is an error, not absence.
    async fn file_exists(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<bool>;
}
