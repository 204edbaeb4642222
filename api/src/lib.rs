//! # graphjson
//!
//! Normalize JSON descriptions of computation graphs into one canonical
//! model, whatever convention they follow.
//!
//! ```
//! use graphjson::prelude::*;
//!
//! let doc = serde_json::json!({
//!     "model_type": "custom",
//!     "graph": { "nodes": [{ "layer_type": "Dense", "params": { "units": 10 } }] }
//! });
//! let model = graphjson::model_for_source(&ParsedDocument::new("mlp.json", doc))
//!     .unwrap()
//!     .expect("a custom json document");
//! assert_eq!(model.format, "Custom JSON");
//! assert_eq!(model.graphs[0].nodes[0].op.name, "Dense");
//! ```

use std::path::Path;

pub use graphjson_cds;
pub use graphjson_core;
pub use graphjson_custom;

pub mod prelude {
    pub use crate::{model_for_path, model_for_source, registry};
    pub use graphjson_cds::{CdsModel, cds};
    pub use graphjson_core::prelude::*;
    pub use graphjson_custom::{CustomJson, custom_json};
}

use prelude::*;

/// Every known format, CDS first, then Custom JSON.
///
/// A document carrying both signatures is claimed by CDS.
pub fn registry() -> Registry {
    Registry::default().with_format(cds()).with_format(custom_json())
}

/// Recognise and build a document with the default registry.
///
/// `Ok(None)` means no format recognised the document.
pub fn model_for_source(source: &dyn DocumentSource) -> GraphResult<Option<Model>> {
    registry().model_for_source(source)
}

pub fn model_for_path(path: impl AsRef<Path>) -> GraphResult<Option<Model>> {
    model_for_source(&FileDocument::new(path))
}

/// graphjson version tag
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
