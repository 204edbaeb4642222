//! Format detection and dispatch.
use crate::errors::{GraphResult, LoadError};
use crate::model::Model;
use crate::source::DocumentSource;
use anyhow::Context;
use serde_json::Value as JsonValue;
use std::borrow::Cow;

/// A document claimed by a format, with the tag of the claiming format.
#[derive(Debug, Clone, PartialEq, new)]
pub struct Claim {
    pub format: String,
    pub document: JsonValue,
}

/// One JSON graph description convention.
///
/// Detection is structural: `matches` looks at which fields are present
/// and what shape they have, and must be total (it never fails, whatever
/// the document). Building is best-effort: `model_for_document` defaults
/// malformed fields and only fails on contract violations.
pub trait Format: Send + Sync {
    /// Tag recorded in claims made by this format.
    fn name(&self) -> Cow<'_, str>;

    /// Is the document worth parsing at all, judging by its identifier?
    fn accepts_identifier(&self, identifier: &str) -> bool;

    /// Does the parsed document carry this format's signature?
    fn matches(&self, document: &JsonValue) -> bool;

    fn model_for_document(&self, document: &JsonValue) -> GraphResult<Model>;

    /// Claim a document on its own, outside of a registry.
    ///
    /// Returns `None` when the identifier is not accepted, the content is
    /// not JSON, or the signature does not match.
    fn try_claim(&self, source: &dyn DocumentSource) -> Option<Claim> {
        if !self.accepts_identifier(source.identifier()) {
            return None;
        }
        let document = match source.peek_json() {
            Ok(document) => document,
            Err(e) => {
                debug!("{}: skipping {}: {:#}", self.name(), source.identifier(), e);
                return None;
            }
        };
        if self.matches(&document) {
            debug!("{} claims {}", self.name(), source.identifier());
            Some(Claim::new(self.name().into_owned(), document))
        } else {
            None
        }
    }

    fn open(&self, claim: &Claim) -> GraphResult<Model> {
        self.model_for_document(&claim.document)
    }

    fn into_boxed(self) -> Box<dyn Format>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Formats ranked by registration order.
///
/// When a document carries the signature of more than one format, the
/// first registered one claims it.
#[derive(Default)]
pub struct Registry {
    formats: Vec<Box<dyn Format>>,
}

impl Registry {
    pub fn with_format(mut self, format: impl Format + 'static) -> Registry {
        self.formats.push(format.into_boxed());
        self
    }

    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.iter().map(|f| &**f)
    }

    pub fn format(&self, tag: &str) -> Option<&dyn Format> {
        self.formats().find(|f| f.name() == tag)
    }

    /// Tags of every format whose signature matches the document, in rank
    /// order.
    pub fn candidates(&self, document: &JsonValue) -> Vec<Cow<'_, str>> {
        self.formats().filter(|f| f.matches(document)).map(|f| f.name()).collect()
    }

    /// Find the format claiming a document.
    ///
    /// The content is only parsed if at least one format accepts the
    /// identifier, and at most once. Unparseable content is not claimed.
    pub fn try_claim(&self, source: &dyn DocumentSource) -> Option<Claim> {
        let accepting: Vec<&dyn Format> =
            self.formats().filter(|f| f.accepts_identifier(source.identifier())).collect();
        if accepting.is_empty() {
            debug!("No format accepts {}", source.identifier());
            return None;
        }
        let document = match source.peek_json() {
            Ok(document) => document,
            Err(e) => {
                debug!("Skipping {}: {:#}", source.identifier(), e);
                return None;
            }
        };
        let matching: Vec<&dyn Format> =
            accepting.into_iter().filter(|f| f.matches(&document)).collect();
        let winner = matching.first()?;
        if matching.len() > 1 {
            warn!(
                "{} matches several formats ({}), {} wins",
                source.identifier(),
                matching.iter().map(|f| f.name()).collect::<Vec<_>>().join(", "),
                winner.name()
            );
        }
        debug!("{} claims {}", winner.name(), source.identifier());
        Some(Claim::new(winner.name().into_owned(), document))
    }

    /// Build the model for a claim, with the format that made it.
    pub fn open(&self, claim: &Claim) -> GraphResult<Model> {
        let format = self
            .format(&claim.format)
            .ok_or_else(|| LoadError::UnknownFormat { tag: claim.format.clone() })?;
        format.open(claim).with_context(|| format!("Building {} model", claim.format))
    }

    /// Claim and build in one go. `Ok(None)` means no format recognised the
    /// document.
    pub fn model_for_source(&self, source: &dyn DocumentSource) -> GraphResult<Option<Model>> {
        match self.try_claim(source) {
            Some(claim) => self.open(&claim).map(Some),
            None => Ok(None),
        }
    }
}
