//! Error types shared by all formats.
use std::fmt;

pub type GraphError = anyhow::Error;
pub type GraphResult<T> = anyhow::Result<T>;

/// Contract violations detected while turning a claimed document into a
/// model. These are terminal for the document at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A builder was handed a null document.
    MissingDocument { format: String },
    /// A claim names a format the registry does not know.
    UnknownFormat { tag: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::MissingDocument { format } => write!(f, "{format} document is missing"),
            LoadError::UnknownFormat { tag } => write!(f, "No registered format for claim {tag:?}"),
        }
    }
}

impl std::error::Error for LoadError {}
