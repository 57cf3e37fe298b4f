//! Output file writer using the GitHub Actions step-output format

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::PublishedArticle;

/// The named outputs emitted for a newly published article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleOutputs {
    /// Front-matter mapping serialized as a JSON object
    pub metadata: String,
    /// Parsed article body
    pub content: String,
    /// Canonical raw-content URL of the article file
    pub file_url: String,
}

impl ArticleOutputs {
    /// Derive the output values from a parsed article
    pub fn from_article(article: &PublishedArticle) -> Result<Self> {
        Ok(Self {
            metadata: article.metadata_json()?,
            content: article.body.clone(),
            file_url: article.file_url.clone(),
        })
    }
}

/// Writer appending records to the step-output file
pub struct OutputWriter;

impl OutputWriter {
    /// Append all article outputs to the file at `path` (`$GITHUB_OUTPUT`)
    pub fn write(outputs: &ArticleOutputs, path: &Path) -> Result<()> {
        let mut f = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| Error::Output(format!("cannot open {}: {}", path.display(), e)))?;

        for (name, value) in [
            ("metadata", outputs.metadata.as_str()),
            ("content", outputs.content.as_str()),
            ("file_url", outputs.file_url.as_str()),
        ] {
            write_record(&mut f, name, value)?;
        }
        Ok(())
    }
}

/// Write one `name=value` record, switching to heredoc syntax for
/// multiline values
fn write_record(w: &mut impl Write, name: &str, value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        let delim = heredoc_delimiter(value);
        writeln!(w, "{name}<<{delim}")?;
        writeln!(w, "{value}")?;
        writeln!(w, "{delim}")?;
    } else {
        writeln!(w, "{name}={value}")?;
    }
    Ok(())
}

/// Pick a heredoc delimiter that cannot occur inside the value
fn heredoc_delimiter(value: &str) -> String {
    let mut delim = "NEWPOST_EOF".to_string();
    while value.contains(&delim) {
        delim.push('_');
    }
    delim
}
