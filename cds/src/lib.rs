//! CDS Model graph descriptions.
//!
//! A CDS document has three top-level sections: `meta_data` (model name and
//! graph-level inputs/outputs), `nodes` (operations, referencing tensors by
//! name) and `edges` (the tensors themselves, with their shapes).
#[macro_use]
extern crate log;

pub mod edges;
pub mod model;
pub mod node;

pub use model::CdsModel;

pub fn cds() -> CdsModel {
    CdsModel::default()
}

pub mod prelude {
    pub use crate::{CdsModel, cds};
    pub use graphjson_core::prelude::*;
}

pub mod internal {
    pub use crate::edges::EdgeTable;
    pub use crate::model::ParsingContext;
    pub use crate::prelude::*;
    pub use graphjson_core::internal::*;
}

#[cfg(test)]
#[allow(dead_code)]
fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHJSON_LOG").try_init();
}
