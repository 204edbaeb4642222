use crate::model::ParsingContext;
use graphjson_core::internal::*;

impl ParsingContext<'_> {
    /// Translate one node record.
    ///
    /// All input references are grouped in a single `inputs` argument, all
    /// outputs in a single `outputs` argument. Every top-level field not
    /// used for the name, type, inputs or outputs becomes an attribute.
    pub fn parse_node(&self, raw: &JsonValue) -> Node {
        let (type_key, op) = json::node_type(raw);
        let mut node = Node::new(json::str_or_default(raw, "name", ""), op);
        if let Some(refs) = json::array(raw, "inputs") {
            node.inputs.push(Argument::new("inputs", self.references(refs)));
        }
        if let Some(refs) = json::array(raw, "outputs") {
            node.outputs.push(Argument::new("outputs", self.references(refs)));
        }
        let classified = ["name", "type", "inputs", "outputs", type_key];
        for (key, value) in raw.as_object().into_iter().flatten() {
            if !classified.contains(&&**key) {
                node.attributes.push(Attribute::new(key.clone(), value.into()));
            }
        }
        node
    }

    fn references(&self, refs: &[JsonValue]) -> Vec<Value> {
        refs.iter()
            .filter_map(|r| match json::reference_name(r) {
                Some(name) => Some(Value::typed(name, self.resolve_type(name, r))),
                None => {
                    debug!("Ignoring tensor reference {r}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn node(raw: JsonValue) -> Node {
        let doc = json!({"edges": [
            {"name": "x", "shape": [1, 3, 224, 224]},
            {"name": "y", "shape": [1, 64, 112, 112]},
        ]});
        ParsingContext::new(&doc).parse_node(&raw)
    }

    #[test]
    fn conv_node() {
        let n = node(json!({
            "name": "conv1",
            "type": "Conv",
            "inputs": ["x", "w"],
            "outputs": ["y"],
            "kernel_shape": [7, 7],
            "strides": [2, 2],
        }));
        assert_eq!(n.name, "conv1");
        assert_eq!(n.op.name, "Conv");
        assert_eq!(n.inputs.len(), 1);
        assert_eq!(n.inputs[0].name, "inputs");
        let inputs: Vec<String> = n.inputs[0].values.iter().map(|v| v.to_string()).collect();
        assert_eq!(inputs, ["x: [1,3,224,224]", "w: ?"]);
        assert_eq!(n.outputs[0].name, "outputs");
        assert_eq!(n.outputs[0].values[0].to_string(), "y: [1,64,112,112]");
        let attrs: Vec<&str> = n.attributes.iter().map(|a| &*a.name).collect();
        assert_eq!(attrs, ["kernel_shape", "strides"]);
        assert_eq!(n.attribute("strides").unwrap().value.to_string(), "[2,2]");
    }

    #[test]
    fn bare_node() {
        let n = node(json!({"name": "lonely"}));
        assert_eq!(n.op.name, "Unknown");
        assert!(n.inputs.is_empty());
        assert!(n.outputs.is_empty());
        assert!(n.attributes.is_empty());
    }

    #[test]
    fn empty_node() {
        let n = node(json!({}));
        assert_eq!(n.name, "");
        assert_eq!(n.op.name, "Unknown");
    }

    #[test]
    fn type_fallback_chain() {
        assert_eq!(node(json!({"op_type": "Relu"})).op.name, "Relu");
        assert_eq!(node(json!({"layer_type": "Dense"})).op.name, "Dense");
        assert_eq!(node(json!({"type": "", "op_type": "Relu"})).op.name, "Relu");
        assert_eq!(node(json!({"type": "Add", "op_type": "Relu"})).op.name, "Add");
    }

    #[test]
    fn unused_type_keys_stay_attributes() {
        let n = node(json!({"type": "Add", "op_type": "Relu", "alpha": 0.5}));
        let attrs: Vec<&str> = n.attributes.iter().map(|a| &*a.name).collect();
        assert_eq!(attrs, ["op_type", "alpha"]);
        let n = node(json!({"op_type": "Relu"}));
        assert!(n.attributes.is_empty());
    }

    #[test]
    fn object_references_with_own_shape() {
        let n = node(json!({
            "inputs": [{"name": "x", "shape": [1, 1]}, {"name": "y"}, 42, null],
            "outputs": [],
        }));
        let inputs: Vec<String> = n.inputs[0].values.iter().map(|v| v.to_string()).collect();
        assert_eq!(inputs, ["x: [1,1]", "y: [1,64,112,112]"]);
        assert_eq!(n.outputs.len(), 1);
        assert!(n.outputs[0].values.is_empty());
    }

    #[test]
    fn malformed_ports_are_ignored() {
        let n = node(json!({"name": "n", "inputs": "x", "outputs": {"name": "y"}}));
        assert!(n.inputs.is_empty());
        assert!(n.outputs.is_empty());
        assert!(n.attributes.is_empty());
    }
}
