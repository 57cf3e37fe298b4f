//! Error types for newpost-core

use std::fmt;

/// Result type alias for newpost operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for newpost operations
#[derive(Debug)]
pub enum Error {
    /// Invalid configuration
    Config(String),

    /// Push event / Actions environment parsing error
    EventParse(String),

    /// No markdown file under the watched folder changed in this commit
    NoArticleFound,

    /// Local read of the selected article failed
    FileRead(String),

    /// HTTP transport error
    Http(String),

    /// GitHub API returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Short description of the failed request
        message: String,
    },

    /// Pattern compilation error
    Pattern(String),

    /// Front matter parsing error
    FrontMatter(String),

    /// Step output writing error
    Output(String),

    /// I/O error
    Io(std::io::Error),

    /// Runtime error (Tokio, threading, etc.)
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::EventParse(msg) => write!(f, "Event parse error: {}", msg),
            Error::NoArticleFound => write!(f, "No markdown files found"),
            Error::FileRead(msg) => write!(f, "File read error: {}", msg),
            Error::Http(msg) => write!(f, "HTTP error: {}", msg),
            Error::Api { status, message } => {
                write!(f, "GitHub API error ({}): {}", status, message)
            }
            Error::Pattern(msg) => write!(f, "Pattern error: {}", msg),
            Error::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            Error::Output(msg) => write!(f, "Output error: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<globset::Error> for Error {
    fn from(err: globset::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::EventParse(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::FrontMatter(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Configuration error
    Config,
    /// Push event parsing error
    EventParse,
    /// No matching markdown file
    NoArticleFound,
    /// Local article read error
    FileRead,
    /// HTTP transport error
    Http,
    /// GitHub API status error
    Api,
    /// Pattern compilation error
    Pattern,
    /// Front matter parsing error
    FrontMatter,
    /// Step output writing error
    Output,
    /// I/O operation error
    Io,
    /// Runtime error
    Runtime,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::EventParse(_) => ErrorKind::EventParse,
            Error::NoArticleFound => ErrorKind::NoArticleFound,
            Error::FileRead(_) => ErrorKind::FileRead,
            Error::Http(_) => ErrorKind::Http,
            Error::Api { .. } => ErrorKind::Api,
            Error::Pattern(_) => ErrorKind::Pattern,
            Error::FrontMatter(_) => ErrorKind::FrontMatter,
            Error::Output(_) => ErrorKind::Output,
            Error::Io(_) => ErrorKind::Io,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Borrow the error message — zero allocation.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Config(msg)
            | Error::EventParse(msg)
            | Error::FileRead(msg)
            | Error::Http(msg)
            | Error::Api { message: msg, .. }
            | Error::Pattern(msg)
            | Error::FrontMatter(msg)
            | Error::Output(msg)
            | Error::Runtime(msg) => msg,
            Error::NoArticleFound => "No markdown files found",
            Error::Io(_) => "I/O error",
        }
    }
}
