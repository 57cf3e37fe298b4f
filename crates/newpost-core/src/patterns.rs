//! Article path matching with precompiled glob patterns

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::Result;
use crate::types::CommitFile;

/// Matcher for markdown article paths under a configured folder
pub struct ArticleMatcher {
    glob_set: GlobSet,
}

impl ArticleMatcher {
    /// Compile the matcher for a folder prefix.
    ///
    /// The pattern is unanchored: the folder may appear at any depth, and
    /// anything below it ending in `.md` matches (globset's default `*`
    /// crosses path separators). An empty folder matches any markdown
    /// path.
    pub fn new(folder: &str) -> Result<Self> {
        let folder = folder.trim_matches('/');
        let pattern = if folder.is_empty() {
            "**/*.md".to_string()
        } else {
            format!("**/{}/*.md", folder)
        };

        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new(&pattern)?);

        Ok(Self {
            glob_set: builder.build()?,
        })
    }

    /// Match a single path - zero allocation
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        self.glob_set.is_match(path)
    }

    /// Select the first matching entry from the commit's file list.
    ///
    /// List order as returned by the platform — not sorted, not
    /// deduplicated.
    pub fn first_match<'f>(&self, files: &'f [CommitFile]) -> Option<&'f CommitFile> {
        files.iter().find(|f| self.matches(&f.filename))
    }

    /// Count matching entries (diagnostic logging only)
    pub fn count_matches(&self, files: &[CommitFile]) -> usize {
        files.iter().filter(|f| self.matches(&f.filename)).count()
    }
}
