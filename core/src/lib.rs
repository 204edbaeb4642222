//! # graphjson-core
//!
//! Canonical in-memory model for computation graphs described in JSON,
//! and the machinery to recognise which description convention a document
//! follows.
//!
//! A [`Format`](framework::Format) knows one convention: it decides from
//! the structure of a parsed document whether it should claim it, and
//! builds a [`Model`](model::Model) from a claimed document. Formats are
//! grouped in a ranked [`Registry`](framework::Registry).
//!
//! ```
//! use graphjson_core::internal::*;
//!
//! struct Bare;
//!
//! impl Format for Bare {
//!     fn name(&self) -> Cow<'_, str> {
//!         "bare".into()
//!     }
//!     fn accepts_identifier(&self, _identifier: &str) -> bool {
//!         true
//!     }
//!     fn matches(&self, document: &JsonValue) -> bool {
//!         document.get("bare").is_some()
//!     }
//!     fn model_for_document(&self, _document: &JsonValue) -> GraphResult<Model> {
//!         Ok(Model::new("Bare", vec![Graph::default()]))
//!     }
//! }
//!
//! let registry = Registry::default().with_format(Bare);
//! let source = ParsedDocument::new("anything", serde_json::json!({ "bare": 1 }));
//! let model = registry.model_for_source(&source).unwrap().unwrap();
//! assert_eq!(model.format, "Bare");
//! ```

#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate log;

pub mod errors;
pub mod framework;
pub mod json;
pub mod model;
pub mod source;

pub use anyhow;
pub use graphjson_data;
pub use serde_json;

pub mod prelude {
    pub use crate::errors::{GraphError, GraphResult};
    pub use crate::framework::{Claim, Format, Registry};
    pub use crate::model::{Argument, Attribute, Graph, Model, Node, Op, Value};
    pub use crate::source::{DocumentSource, FileDocument, InMemoryDocument, ParsedDocument};
    pub use graphjson_data::prelude::*;
}

pub mod internal {
    pub use crate::errors::LoadError;
    pub use crate::json;
    pub use crate::prelude::*;
    pub use crate::source::{extension_of, has_extension};
    pub use anyhow::{Context, anyhow, bail, ensure, format_err};
    pub use serde_json::Value as JsonValue;
    pub use std::borrow::Cow;
}

#[cfg(test)]
#[allow(dead_code)]
fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHJSON_LOG").try_init();
}
