//! Custom JSON graph descriptions.
//!
//! Documents declare `model_type: "custom"` or carry a `graph` section with
//! `nodes` and `layers`. Nodes (or layers) name their type, inputs and
//! outputs loosely, keep their hyper-parameters under `params`,
//! `attributes` or `config`, and may embed their weights.
#[macro_use]
extern crate log;

pub mod model;
pub mod node;

pub use model::CustomJson;

pub fn custom_json() -> CustomJson {
    CustomJson::default()
}

pub mod prelude {
    pub use crate::{CustomJson, custom_json};
    pub use graphjson_core::prelude::*;
}

pub mod internal {
    pub use crate::prelude::*;
    pub use graphjson_core::internal::*;
}

#[cfg(test)]
#[allow(dead_code)]
fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHJSON_LOG").try_init();
}
