use graphjson_core::internal::*;
use std::collections::HashMap;

/// Edge descriptors of a document, indexed by edge name.
///
/// Names are expected to be unique. When they are not, the last edge with
/// a given name shadows the previous ones.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable<'a> {
    by_name: HashMap<&'a str, &'a JsonValue>,
}

impl<'a> EdgeTable<'a> {
    /// Index the top-level `edges` array. Entries without a non-empty
    /// string `name` are ignored.
    pub fn from_document(document: &'a JsonValue) -> EdgeTable<'a> {
        let mut by_name = HashMap::new();
        for edge in json::array(document, "edges").into_iter().flatten() {
            match json::non_empty_str(edge, "name") {
                Some(name) => {
                    if by_name.insert(name, edge).is_some() {
                        trace!("Edge {name:?} redefined, keeping the last one");
                    }
                }
                None => debug!("Ignoring unnamed edge {edge}"),
            }
        }
        EdgeTable { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a JsonValue> {
        self.by_name.get(name).copied()
    }

    /// Shape declared by the edge called `name`.
    pub fn shape(&self, name: &str) -> Option<TensorShape> {
        self.get(name).and_then(json::declared_shape)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
