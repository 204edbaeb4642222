use graphjson::graphjson_core::internal::*;
use graphjson::prelude::*;
use serde_json::json;
use std::io::Write;

fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHJSON_LOG").try_init();
}

fn load(identifier: &str, doc: JsonValue) -> Option<Model> {
    setup_test_logger();
    graphjson::model_for_source(&ParsedDocument::new(identifier, doc)).unwrap()
}

#[test]
fn cds_scenario() {
    let model = load(
        "m.json",
        json!({
            "meta_data": {"name": "m", "inputs": [{"name": "x"}]},
            "nodes": [{"name": "n1", "type": "Conv", "inputs": ["x"], "outputs": ["y"]}],
            "edges": [{"name": "x", "shape": [1, 3, 224, 224]}],
        }),
    )
    .unwrap();
    assert_eq!(model.format, "CDS Model");
    assert_eq!(model.producer, "m");
    assert_eq!(model.graphs.len(), 1);
    let graph = &model.graphs[0];
    assert_eq!(graph.inputs.len(), 1);
    assert_eq!(graph.inputs[0].name, "x");
    assert_eq!(graph.inputs[0].values[0].ty.as_ref().unwrap().to_string(), "[1,3,224,224]");
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].name, "n1");
    assert_eq!(graph.nodes[0].op.name, "Conv");
    assert_eq!(graph.nodes[0].inputs[0].values[0].to_string(), "x: [1,3,224,224]");
    assert_eq!(graph.nodes[0].outputs[0].values[0].to_string(), "y: ?");
}

#[test]
fn custom_json_scenario() {
    let model = load(
        "m.json",
        json!({"model_type": "custom", "graph": {"nodes": [{"layer_type": "Dense", "params": {"units": 10}}]}}),
    )
    .unwrap();
    assert_eq!(model.format, "Custom JSON");
    let node = &model.graphs[0].nodes[0];
    assert_eq!(node.name, "node_0");
    assert_eq!(node.op.name, "Dense");
    assert_eq!(node.attributes.len(), 1);
    assert_eq!(node.attributes[0].name, "units");
    assert_eq!(node.attributes[0].value, Literal::Int(10));
}

#[test]
fn unrecognised_documents() {
    assert!(load("m.json", json!({"nodes": [], "edges": []})).is_none());
    assert!(load("m.json", json!({"model_type": "keras"})).is_none());
    assert!(load("m.json", json!([1, 2, 3])).is_none());
    assert!(load("m.json", JsonValue::Null).is_none());
}

#[test]
fn extension_is_checked_before_content() {
    let doc = json!({"model_type": "custom"});
    assert!(load("m.txt", doc.clone()).is_none());
    assert!(load("json", doc.clone()).is_none());
    assert!(load("M.JSON", doc).is_some());
}

#[test]
fn malformed_json_is_not_a_match() -> GraphResult<()> {
    let source = InMemoryDocument::new("broken.json".into(), b"{\"model_type\": \"custom\"".to_vec());
    assert!(graphjson::registry().try_claim(&source).is_none());
    assert!(graphjson::model_for_source(&source)?.is_none());
    Ok(())
}

#[test]
fn ambiguous_documents_go_to_cds() {
    let doc = json!({"model_type": "custom", "meta_data": {}, "nodes": [{"type": "Relu"}], "edges": []});
    let registry = graphjson::registry();
    assert_eq!(registry.candidates(&doc), vec!["cdsmodel", "customjson"]);
    let claim = registry.try_claim(&ParsedDocument::new("m.json", doc)).unwrap();
    assert_eq!(claim.format, "cdsmodel");
    assert_eq!(registry.open(&claim).unwrap().format, "CDS Model");
}

#[test]
fn custom_registry_order_changes_the_winner() {
    let doc = json!({"model_type": "custom", "meta_data": {}, "nodes": [], "edges": []});
    let registry = Registry::default().with_format(custom_json()).with_format(cds());
    let claim = registry.try_claim(&ParsedDocument::new("m.json", doc)).unwrap();
    assert_eq!(claim.format, "customjson");
}

#[test]
fn missing_document_claim_fails() {
    let err = graphjson::registry().open(&Claim::new("customjson".into(), JsonValue::Null)).unwrap_err();
    assert_eq!(
        err.root_cause().downcast_ref::<LoadError>(),
        Some(&LoadError::MissingDocument { format: "Custom JSON".into() })
    );
}

#[test]
fn building_twice_gives_equal_models() {
    let doc = json!({
        "model_type": "custom",
        "version": 1,
        "graph": {
            "inputs": [{"name": "x", "shape": [1, 4]}],
            "outputs": ["y"],
            "nodes": [
                {"name": "fc", "type": "Dense", "inputs": ["x"], "outputs": ["h"],
                 "config": {"units": 8, "use_bias": true},
                 "weights": {"kernel": {"shape": [4, 8], "data": []}, "bias": [0, 0, 0, 0, 0, 0, 0, 0]}},
                {"name": "act", "type": "Relu", "inputs": ["h"], "outputs": ["y"]},
            ],
        },
    });
    let a = load("m.json", doc.clone()).unwrap();
    let b = load("m.json", doc).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.format, "Custom JSON v1");
    let order: Vec<&str> = a.graphs[0].nodes.iter().map(|n| &*n.name).collect();
    assert_eq!(order, ["fc", "act"]);
}

#[test]
fn model_serializes_for_viewers() {
    let model = load(
        "m.json",
        json!({
            "meta_data": {"name": "m", "inputs": ["x"], "outputs": ["y"]},
            "nodes": [{"name": "n1", "type": "Relu", "inputs": ["x"], "outputs": ["y"], "inplace": true}],
            "edges": [{"name": "x", "shape": [2, "N"]}, {"name": "y", "shape": [2, "N"]}],
        }),
    )
    .unwrap();
    let value = serde_json::to_value(&model).unwrap();
    assert_eq!(value["format"], "CDS Model");
    assert_eq!(value["description"], "");
    let graph = &value["modules"][0];
    assert_eq!(graph["name"], "m");
    assert_eq!(graph["inputs"][0]["value"][0]["type"], json!({"shape": [2, "N"]}));
    assert_eq!(graph["nodes"][0]["type"]["name"], "Relu");
    assert_eq!(graph["nodes"][0]["attributes"], json!([{"name": "inplace", "value": true}]));
}

#[test]
fn from_file() -> GraphResult<()> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{"meta_data": {{"name": "disk"}}, "nodes": [{{"name": "a", "type": "Add"}}], "edges": []}}"#
    )?;
    let model = graphjson::model_for_path(file.path())?.unwrap();
    assert_eq!(model.producer, "disk");
    assert_eq!(model.graphs[0].nodes[0].op.name, "Add");

    let other = tempfile::Builder::new().suffix(".bin").tempfile()?;
    assert!(graphjson::model_for_path(other.path())?.is_none());
    Ok(())
}
