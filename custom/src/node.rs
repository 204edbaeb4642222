use graphjson_core::internal::*;

/// Keys that may hold a node's hyper-parameters, by priority.
pub const PARAMS_KEYS: [&str; 3] = ["params", "attributes", "config"];

/// Translate the node record at position `index` in the node list.
///
/// Each input and output reference becomes its own argument, named after
/// the reference. Embedded weights are appended to the inputs as hidden
/// arguments whose value carries the tensor as initializer.
pub fn parse_node(raw: &JsonValue, index: usize) -> Node {
    let name = json::non_empty_str(raw, "name")
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("node_{index}"));
    let (_, op) = json::node_type(raw);
    let mut node = Node::new(name, op);
    node.inputs = ports(raw, "inputs");
    node.outputs = ports(raw, "outputs");
    if let Some(params) = PARAMS_KEYS.iter().find_map(|k| json::object(raw, k)) {
        node.attributes =
            params.iter().map(|(k, v)| Attribute::new(k.clone(), Literal::from(v))).collect();
    }
    if let Some(weights) = json::object(raw, "weights") {
        node.inputs.extend(weights.iter().map(|(k, v)| weight(k, v)));
    }
    node
}

fn ports(raw: &JsonValue, key: &str) -> Vec<Argument> {
    json::array(raw, key)
        .into_iter()
        .flatten()
        .filter_map(|r| {
            let name = json::reference_name(r);
            if name.is_none() {
                debug!("Ignoring tensor reference {r}");
            }
            name
        })
        .map(|name| Argument::single(Value::untyped(name)))
        .collect()
}

fn weight(name: &str, data: &JsonValue) -> Argument {
    let value = match Tensor::from_json(name, data) {
        Some(tensor) => Value::constant(tensor),
        None => {
            debug!("Weight {name:?} is neither a sequence nor a tensor description");
            Value::untyped(name)
        }
    };
    Argument::single(value).hidden()
}
