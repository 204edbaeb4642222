use crate::edges::EdgeTable;
use graphjson_core::internal::*;

pub const FORMAT: &str = "CDS Model";
pub const TAG: &str = "cdsmodel";

#[derive(Clone, Debug)]
pub struct CdsModel {
    pub extensions: Vec<String>,
}

impl Default for CdsModel {
    fn default() -> CdsModel {
        CdsModel { extensions: vec!["json".to_string()] }
    }
}

impl CdsModel {
    pub fn with_extension(mut self, extension: impl Into<String>) -> CdsModel {
        self.extensions.push(extension.into());
        self
    }
}

/// A `meta_data` object, a `nodes` array and an `edges` array.
pub fn signature(document: &JsonValue) -> bool {
    json::object(document, "meta_data").is_some()
        && json::array(document, "nodes").is_some()
        && json::array(document, "edges").is_some()
}

impl Format for CdsModel {
    fn name(&self) -> Cow<'_, str> {
        TAG.into()
    }

    fn accepts_identifier(&self, identifier: &str) -> bool {
        has_extension(identifier, &self.extensions)
    }

    fn matches(&self, document: &JsonValue) -> bool {
        signature(document)
    }

    fn model_for_document(&self, document: &JsonValue) -> GraphResult<Model> {
        if document.is_null() {
            return Err(LoadError::MissingDocument { format: FORMAT.to_string() }.into());
        }
        let meta = &document["meta_data"];
        let ctx = ParsingContext::new(document);
        let graph = ctx.parse_graph(document);
        debug!("{}: {} nodes, {} edges", FORMAT, graph.nodes.len(), ctx.edges.len());
        Ok(Model {
            format: FORMAT.to_string(),
            name: json::str_or_default(meta, "name", ""),
            producer: json::str_or_default(meta, "name", ""),
            description: json::str_or_default(meta, "description", ""),
            graphs: vec![graph],
        })
    }
}

/// Shared state while a document is translated: the edge table nodes and
/// graph ports look their shapes up in.
#[derive(Clone, Debug)]
pub struct ParsingContext<'a> {
    pub edges: EdgeTable<'a>,
}

impl<'a> ParsingContext<'a> {
    pub fn new(document: &'a JsonValue) -> ParsingContext<'a> {
        ParsingContext { edges: EdgeTable::from_document(document) }
    }

    /// Type of the tensor `name`, referenced by `descriptor`.
    ///
    /// A shape declared on the descriptor wins over the shape of the edge
    /// with the same name; an unset shape such as `""` declares nothing.
    /// With neither, the type is unknown.
    pub fn resolve_type(&self, name: &str, descriptor: &JsonValue) -> Option<TensorType> {
        json::declared_shape(descriptor)
            .or_else(|| self.edges.shape(name))
            .map(TensorType::shape_only)
    }

    pub fn parse_graph(&self, document: &JsonValue) -> Graph {
        let meta = &document["meta_data"];
        let inputs = json::as_list(meta.get("inputs"))
            .into_iter()
            .map(|d| self.graph_port(d, "input"))
            .collect();
        let outputs = json::as_list(meta.get("outputs"))
            .into_iter()
            .map(|d| self.graph_port(d, "output"))
            .collect();
        let mut nodes = vec![];
        for (ix, raw) in json::array(document, "nodes").into_iter().flatten().enumerate() {
            if !raw.is_object() {
                debug!("Skipping node entry #{ix}: {raw}");
                continue;
            }
            let node = self.parse_node(raw);
            trace!("Node #{ix}: {node}");
            nodes.push(node);
        }
        Graph { name: json::str_or_default(meta, "name", "graph"), inputs, outputs, nodes }
    }

    fn graph_port(&self, descriptor: &JsonValue, default_name: &str) -> Argument {
        let name = json::reference_name(descriptor)
            .filter(|n| !n.is_empty())
            .unwrap_or(default_name);
        let ty = self.resolve_type(name, descriptor);
        Argument::single(Value::typed(name, ty))
    }
}
