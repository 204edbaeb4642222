//! Where documents come from.
//!
//! A source is opaque to formats: they only ever look at its identifier
//! (to sniff an extension) and at its content decoded as JSON.
use crate::errors::GraphResult;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub trait DocumentSource {
    /// Name of the document, used for extension sniffing only.
    fn identifier(&self) -> &str;

    /// Content decoded as JSON. Fails if the content is not valid JSON.
    fn peek_json(&self) -> GraphResult<serde_json::Value>;
}

/// Lower-cased extension of an identifier, or an empty string.
///
/// The extension is whatever follows the last dot of the final path
/// component, provided that dot is not the component's first character
/// (`.json` alone has no extension).
pub fn extension_of(identifier: &str) -> String {
    let file_name = identifier.rsplit(['/', '\\']).next().unwrap_or(identifier);
    match file_name.rfind('.') {
        Some(ix) if ix > 0 => file_name[ix + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Does the identifier carry one of the extensions (compared
/// case-insensitively)?
pub fn has_extension(identifier: &str, extensions: &[String]) -> bool {
    let ext = extension_of(identifier);
    !ext.is_empty() && extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
}

/// A document held in memory as raw bytes.
#[derive(Debug, Clone, new)]
pub struct InMemoryDocument {
    identifier: String,
    bytes: Vec<u8>,
}

impl DocumentSource for InMemoryDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn peek_json(&self) -> GraphResult<serde_json::Value> {
        serde_json::from_slice(&self.bytes)
            .with_context(|| format!("Parsing {} as JSON", self.identifier))
    }
}

/// A document the host already decoded.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    identifier: String,
    value: serde_json::Value,
}

impl ParsedDocument {
    pub fn new(identifier: impl Into<String>, value: serde_json::Value) -> ParsedDocument {
        ParsedDocument { identifier: identifier.into(), value }
    }
}

impl DocumentSource for ParsedDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn peek_json(&self) -> GraphResult<serde_json::Value> {
        Ok(self.value.clone())
    }
}

/// A document on the filesystem, read when peeked.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    identifier: String,
}

impl FileDocument {
    pub fn new(path: impl AsRef<Path>) -> FileDocument {
        let path = path.as_ref().to_path_buf();
        let identifier = path.to_string_lossy().into_owned();
        FileDocument { path, identifier }
    }
}

impl DocumentSource for FileDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn peek_json(&self) -> GraphResult<serde_json::Value> {
        let bytes = fs_err::read(&self.path)?;
        serde_json::from_slice(&bytes).with_context(|| format!("Parsing {:?} as JSON", self.path))
    }
}
