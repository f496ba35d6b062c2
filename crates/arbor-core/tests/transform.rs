use arbor_core::dedup::deduplicate;
use arbor_core::ids::NodeIdAllocator;
use arbor_core::node::RawNode;
use arbor_core::parse::parse_indentation_tree;
use arbor_core::transform::{ReferenceKind, transform_nodes};

fn parsed_and_deduped(text: &str) -> Vec<RawNode> {
    let mut ids = NodeIdAllocator::new();
    let parsed = parse_indentation_tree(text, &mut ids).expect("parse should succeed");
    deduplicate(parsed).expect("dedup should succeed").nodes
}

#[test]
fn round_trip_reproduces_parent_and_child_id_sets() {
    let nodes = parsed_and_deduped(
        "ROOT: (TYPE_TITLE)\n    Pleura: (TYPE_TOPIC)\n        Effusion? (TYPE_QUESTION)\n            - Yes (TYPE_QCS)\n            - No (TYPE_QCS)\n",
    );

    let outcome = transform_nodes(&nodes);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.nodes.len(), nodes.len());

    for (raw, transformed) in nodes.iter().zip(&outcome.nodes) {
        assert_eq!(transformed.id, raw.id);
        assert_eq!(
            transformed.parent.as_ref().map(|p| p.id.clone()),
            raw.parent
        );
        let child_ids: Vec<String> = transformed.childs.iter().map(|c| c.id.clone()).collect();
        assert_eq!(child_ids, raw.childs, "child order must be preserved");
    }
}

#[test]
fn references_carry_the_referenced_nodes_text() {
    let nodes = parsed_and_deduped("ROOT: (TYPE_TITLE)\n    Age: (TYPE_QUESTION)\n");
    let outcome = transform_nodes(&nodes);

    let age = outcome
        .nodes
        .iter()
        .find(|n| n.text == "Age")
        .expect("Age node transformed");
    assert_eq!(age.parent.as_ref().map(|p| p.text.as_str()), Some("ROOT"));

    let root = &outcome.nodes[0];
    assert_eq!(root.childs[0].text, "Age");
}

#[test]
fn dangling_child_is_dropped_and_reported() {
    let nodes = vec![RawNode {
        id: "1".to_string(),
        node_type: "TYPE_TOPIC".to_string(),
        text: "Orphaned".to_string(),
        is_leaf: false,
        parent: None,
        parent_text: None,
        childs: vec!["99".to_string()],
    }];

    let outcome = transform_nodes(&nodes);

    assert!(outcome.nodes[0].childs.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].kind, ReferenceKind::Child);
    assert_eq!(outcome.warnings[0].referenced, "99");
}

#[test]
fn dangling_parent_is_dropped_and_reported() {
    let nodes = vec![RawNode {
        id: "1".to_string(),
        node_type: "TYPE_TEXT".to_string(),
        text: "Stray".to_string(),
        is_leaf: true,
        parent: Some("42".to_string()),
        parent_text: Some("Gone".to_string()),
        childs: Vec::new(),
    }];

    let outcome = transform_nodes(&nodes);

    assert!(outcome.nodes[0].parent.is_none());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].kind, ReferenceKind::Parent);
}

#[test]
fn transformed_nodes_serialize_with_the_wire_field_names() {
    let nodes = parsed_and_deduped("ROOT: (TYPE_TITLE)\n    Age: (TYPE_QUESTION)\n");
    let outcome = transform_nodes(&nodes);

    let value = serde_json::to_value(&outcome.nodes[0]).expect("serializable");
    let object = value.as_object().expect("node serializes to an object");

    assert!(object.contains_key("nodeType"));
    assert!(object.contains_key("isLeaf"));
    assert!(object.contains_key("childs"));
    assert!(object["parent"].is_null());
    assert_eq!(object["childs"][0]["text"], "Age");
}
