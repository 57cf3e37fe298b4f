//! Step-output emission for downstream workflow steps

pub mod writer;

pub use writer::{ArticleOutputs, OutputWriter};
