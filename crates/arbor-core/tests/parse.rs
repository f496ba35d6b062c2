use std::collections::HashMap;

use arbor_core::error::TreeError;
use arbor_core::ids::NodeIdAllocator;
use arbor_core::node::RawNode;
use arbor_core::parse::parse_indentation_tree;

fn parse(text: &str) -> Vec<RawNode> {
    let mut ids = NodeIdAllocator::new();
    parse_indentation_tree(text, &mut ids).expect("parse should succeed")
}

#[test]
fn indication_scenario_parses_four_nodes() {
    let text = "INDICATION: (TYPE_TITLE)\n    Age: (TYPE_QUESTION)\n        - Adult (TYPE_QCM)\n        - Pediatric (TYPE_QCM)\n";
    let nodes = parse(text);

    assert_eq!(nodes.len(), 4);

    let title = &nodes[0];
    assert_eq!(title.text, "INDICATION");
    assert_eq!(title.node_type, "TYPE_TITLE");
    assert_eq!(title.parent, None);
    assert!(!title.is_leaf);

    let age = &nodes[1];
    assert_eq!(age.text, "Age");
    assert_eq!(age.node_type, "TYPE_QUESTION");
    assert_eq!(age.parent.as_deref(), Some(title.id.as_str()));
    assert_eq!(age.parent_text.as_deref(), Some("INDICATION"));
    assert_eq!(age.childs, vec![nodes[2].id.clone(), nodes[3].id.clone()]);

    // Explicit brackets win over the list-marker inference.
    assert_eq!(nodes[2].text, "Adult");
    assert_eq!(nodes[2].node_type, "TYPE_QCM");
    assert_eq!(nodes[3].text, "Pediatric");
    assert_eq!(nodes[3].node_type, "TYPE_QCM");
    assert!(nodes[2].is_leaf);
    assert!(nodes[3].is_leaf);
}

#[test]
fn blank_lines_do_not_reset_nesting() {
    let text = "ROOT: (TYPE_TITLE)\n    Topic: (TYPE_TOPIC)\n\n\n        Leaf (TYPE_TEXT)\n";
    let nodes = parse(text);

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[2].parent.as_deref(), Some(nodes[1].id.as_str()));
}

#[test]
fn unannotated_lines_infer_types() {
    let text = "Exam\n    Is there pain?\n        - Yes\n        Severity\n";
    let nodes = parse(text);

    assert_eq!(nodes[0].node_type, "root");
    assert_eq!(nodes[1].node_type, "question");
    assert_eq!(nodes[2].node_type, "option");
    assert_eq!(nodes[3].node_type, "node");
}

#[test]
fn second_parentless_node_is_rejected() {
    let text = "Exam A: (TYPE_ROOT)\nExam B: (TYPE_ROOT)\n";
    let mut ids = NodeIdAllocator::new();
    let err = parse_indentation_tree(text, &mut ids).expect_err("second root must fail");

    match err {
        TreeError::MultipleRoots { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "Exam B");
        }
        other => panic!("expected MultipleRoots, got {other:?}"),
    }
}

#[test]
fn last_bracket_group_wins_and_earlier_groups_stay_in_text() {
    let nodes = parse("Pain (left) side: (TYPE_QUESTION)\n");
    assert_eq!(nodes[0].node_type, "TYPE_QUESTION");
    assert_eq!(nodes[0].text, "Pain (left) side");
}

#[test]
fn non_trailing_bracket_group_sets_type_but_keeps_text() {
    let nodes = parse("Combine (TYPE_OPERATION) both criteria\n");
    assert_eq!(nodes[0].node_type, "TYPE_OPERATION");
    assert_eq!(nodes[0].text, "Combine (TYPE_OPERATION) both criteria");
}

#[test]
fn empty_bracket_yields_empty_type() {
    let nodes = parse("Unlabeled node ()\n");
    assert_eq!(nodes[0].node_type, "");
    assert_eq!(nodes[0].text, "Unlabeled node");
}

#[test]
fn dedent_of_arbitrary_size_resolves_parent() {
    let text = "ROOT: (TYPE_TITLE)\n    A: (TYPE_TOPIC)\n            Deep (TYPE_TEXT)\n    B: (TYPE_TOPIC)\n";
    let nodes = parse(text);

    let b = nodes.iter().find(|n| n.text == "B").expect("B parsed");
    assert_eq!(b.parent.as_deref(), Some(nodes[0].id.as_str()));

    let root_childs: Vec<&str> = nodes[0].childs.iter().map(String::as_str).collect();
    assert_eq!(root_childs.len(), 2);
}

#[test]
fn ids_are_not_reused_across_parses_sharing_an_allocator() {
    let mut ids = NodeIdAllocator::new();
    let first = parse_indentation_tree("A: (TYPE_TITLE)\n    B (TYPE_TEXT)\n", &mut ids)
        .expect("first parse");
    let second = parse_indentation_tree("C: (TYPE_TITLE)\n    D (TYPE_TEXT)\n", &mut ids)
        .expect("second parse");

    for node in &second {
        assert!(
            first.iter().all(|n| n.id != node.id),
            "id {} reused across parses",
            node.id
        );
    }
}

// ── Parser idempotence ───────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct Shape {
    text: String,
    node_type: String,
    children: Vec<Shape>,
}

fn shape_of(nodes: &[RawNode]) -> Shape {
    let by_id: HashMap<&str, &RawNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let root = nodes
        .iter()
        .find(|n| n.parent.is_none())
        .expect("tree has a root");
    build_shape(root, &by_id)
}

fn build_shape(node: &RawNode, by_id: &HashMap<&str, &RawNode>) -> Shape {
    Shape {
        text: node.text.clone(),
        node_type: node.node_type.clone(),
        children: node
            .childs
            .iter()
            .map(|id| build_shape(by_id[id.as_str()], by_id))
            .collect(),
    }
}

fn render(nodes: &[RawNode]) -> String {
    let by_id: HashMap<&str, &RawNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let root = nodes
        .iter()
        .find(|n| n.parent.is_none())
        .expect("tree has a root");
    let mut out = String::new();
    render_node(root, &by_id, 0, &mut out);
    out
}

fn render_node(node: &RawNode, by_id: &HashMap<&str, &RawNode>, depth: usize, out: &mut String) {
    out.push_str(&" ".repeat(depth * 4));
    out.push_str(&format!("{} ({})\n", node.text, node.node_type));
    for child in &node.childs {
        render_node(by_id[child.as_str()], by_id, depth + 1, out);
    }
}

#[test]
fn reparsing_rendered_output_is_isomorphic() {
    let text = "CT Chest: (TYPE_TITLE)\n    Pleura: (TYPE_TOPIC)\n        Is there an effusion? (TYPE_QUESTION)\n            - Yes (TYPE_QCS)\n            - No (TYPE_QCS)\n    Volume: (TYPE_MEASURE)\n";
    let first = parse(text);
    let second = parse(&render(&first));

    assert_eq!(shape_of(&first), shape_of(&second));
}
