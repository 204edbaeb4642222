use crate::node::parse_node;
use graphjson_core::internal::*;

pub const FORMAT: &str = "Custom JSON";
pub const TAG: &str = "customjson";

#[derive(Clone, Debug)]
pub struct CustomJson {
    pub extensions: Vec<String>,
}

impl Default for CustomJson {
    fn default() -> CustomJson {
        CustomJson { extensions: vec!["json".to_string()] }
    }
}

impl CustomJson {
    pub fn with_extension(mut self, extension: impl Into<String>) -> CustomJson {
        self.extensions.push(extension.into());
        self
    }
}

/// `model_type` is `"custom"`, or a `graph` object has both `nodes` and
/// `layers` arrays.
pub fn signature(document: &JsonValue) -> bool {
    if document.get("model_type").and_then(|t| t.as_str()) == Some("custom") {
        return true;
    }
    match document.get("graph") {
        Some(graph) if graph.is_object() => {
            json::array(graph, "nodes").is_some() && json::array(graph, "layers").is_some()
        }
        _ => false,
    }
}

/// Format label, with the declared version appended when there is one.
pub fn format_label(document: &JsonValue) -> String {
    match document.get("version") {
        Some(v) if json::is_truthy(v) => format!("{FORMAT} v{}", json::display_scalar(v)),
        _ => FORMAT.to_string(),
    }
}

impl Format for CustomJson {
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
        let graph = parse_graph(document);
        debug!("{}: {} nodes", FORMAT, graph.nodes.len());
        Ok(Model {
            format: format_label(document),
            name: json::str_or_default(document, "name", ""),
            producer: json::str_or_default(document, "producer", ""),
            description: json::str_or_default(document, "description", ""),
            graphs: vec![graph],
        })
    }
}

/// Build the graph from the `graph` section, or from the document itself
/// when it has no such section.
pub fn parse_graph(document: &JsonValue) -> Graph {
    let section = match document.get("graph") {
        Some(graph) if graph.is_object() => graph,
        _ => document,
    };
    let inputs = json::as_list(section.get("inputs")).into_iter().map(graph_port).collect();
    let outputs = json::as_list(section.get("outputs")).into_iter().map(graph_port).collect();
    let raw_nodes = ["nodes", "layers"].iter().find_map(|k| json::array(section, k));
    let mut nodes = vec![];
    for (ix, raw) in raw_nodes.into_iter().flatten().enumerate() {
        if !raw.is_object() {
            debug!("Skipping node entry #{ix}: {raw}");
            continue;
        }
        let node = parse_node(raw, ix);
        trace!("Node #{ix}: {node}");
        nodes.push(node);
    }
    Graph { name: json::str_or_default(document, "name", ""), inputs, outputs, nodes }
}

/// Type declared on a graph port or tensor reference.
///
/// A declared `shape` or element type (`dtype`, or a string `type`) makes
/// a type; the missing half defaults to float32 or to an empty shape.
pub fn declared_type(descriptor: &JsonValue) -> Option<TensorType> {
    let shape = json::declared_shape(descriptor);
    let data_type = json::non_empty_str(descriptor, "dtype")
        .or_else(|| json::non_empty_str(descriptor, "type"));
    if shape.is_none() && data_type.is_none() {
        return None;
    }
    Some(TensorType::new(
        data_type.map(DatumType::from).unwrap_or_default(),
        shape.unwrap_or_default(),
    ))
}

fn graph_port(descriptor: &JsonValue) -> Argument {
    let name = json::reference_name(descriptor).unwrap_or("");
    Argument::single(Value::typed(name, declared_type(descriptor)))
}
