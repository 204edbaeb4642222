use graphjson_cds::internal::*;
use proptest::prelude::*;
use serde_json::json;

fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        any::<i32>().prop_map(JsonValue::from),
        "[a-z_]{0,8}".prop_map(JsonValue::from),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            proptest::collection::vec(
                (prop_oneof!["meta_data", "nodes", "edges", "name", "shape", "[a-z]{1,4}"], inner),
                0..6
            )
            .prop_map(|entries| JsonValue::Object(entries.into_iter().collect())),
        ]
    })
}

fn arb_shape() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(1i64..512, 0..5)
}

proptest! {
    #[test]
    fn documents_without_signature_are_not_claimed(doc in arb_json()) {
        let cds = cds();
        let claim = cds.try_claim(&ParsedDocument::new("m.json", doc.clone()));
        let has_signature = doc.get("meta_data").map_or(false, |m| m.is_object())
            && doc.get("nodes").map_or(false, |n| n.is_array())
            && doc.get("edges").map_or(false, |e| e.is_array());
        prop_assert_eq!(claim.is_some(), has_signature);
    }

    #[test]
    fn building_never_fails_on_claimed_documents(doc in arb_json()) {
        let mut doc = doc;
        if let Some(map) = doc.as_object_mut() {
            map.insert("meta_data".into(), json!({}));
            map.entry("nodes").or_insert(json!([]));
            map.entry("edges").or_insert(json!([]));
        }
        let cds = cds();
        if let Some(claim) = cds.try_claim(&ParsedDocument::new("m.json", doc)) {
            prop_assert!(cds.open(&claim).is_ok());
        }
    }

    #[test]
    fn undeclared_port_shapes_come_from_edges(
        names in proptest::collection::hash_set("[a-z]{1,6}", 1..5),
        shapes in proptest::collection::vec(arb_shape(), 5),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let edges: Vec<JsonValue> = names
            .iter()
            .zip(shapes.iter())
            .map(|(n, s)| json!({"name": n, "shape": s}))
            .collect();
        let inputs: Vec<JsonValue> = names.iter().map(|n| json!({"name": n})).collect();
        let doc = json!({"meta_data": {"inputs": inputs}, "nodes": [], "edges": edges});
        let model = cds().model_for_document(&doc).unwrap();
        let graph = model.graph().unwrap();
        for (name, shape) in names.iter().zip(shapes.iter()) {
            let expected = TensorShape::from_dims(shape.iter().map(|d| Dim::Int(*d)));
            let arg = graph.input_by_name(name).unwrap();
            prop_assert_eq!(&arg.values[0].ty.as_ref().unwrap().shape, &expected);
        }
    }

    #[test]
    fn building_is_deterministic(doc in arb_json()) {
        prop_assume!(!doc.is_null());
        let cds = cds();
        let a = cds.model_for_document(&doc).unwrap();
        let b = cds.model_for_document(&doc).unwrap();
        prop_assert_eq!(a, b);
    }
}
