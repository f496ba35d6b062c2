//! Projection into the export-ready node shape.

use std::collections::HashMap;

use tracing::warn;

use crate::node::{NodeRef, RawNode, TransformedNode};

/// Which side of an edge a dangling reference sat on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Parent,
    Child,
}

/// A parent or child reference that pointed outside the node set and was
/// omitted from the transformed output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub node_id: String,
    pub referenced: String,
    pub kind: ReferenceKind,
}

#[derive(Debug)]
pub struct TransformOutcome {
    pub nodes: Vec<TransformedNode>,
    pub warnings: Vec<DanglingReference>,
}

/// Expand bare parent/child ids into `{id, text}` pairs, using the
/// referenced node's text at transform time.
///
/// Correct deduplication leaves no reference pointing outside the mapping,
/// so this is a pure projection in practice. A dangler is nonetheless
/// dropped from the output rather than trusted — and reported back, so the
/// leniency is visible instead of silent.
pub fn transform_nodes(nodes: &[RawNode]) -> TransformOutcome {
    let text_of: HashMap<&str, &str> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.text.as_str()))
        .collect();

    let mut warnings = Vec::new();
    let mut transformed = Vec::with_capacity(nodes.len());

    for node in nodes {
        let parent = node.parent.as_ref().and_then(|pid| {
            match text_of.get(pid.as_str()) {
                Some(text) => Some(NodeRef {
                    id: pid.clone(),
                    text: (*text).to_string(),
                }),
                None => {
                    warn!(node = %node.id, parent = %pid, "dropping dangling parent reference");
                    warnings.push(DanglingReference {
                        node_id: node.id.clone(),
                        referenced: pid.clone(),
                        kind: ReferenceKind::Parent,
                    });
                    None
                }
            }
        });

        let mut childs = Vec::with_capacity(node.childs.len());
        for child in &node.childs {
            match text_of.get(child.as_str()) {
                Some(text) => childs.push(NodeRef {
                    id: child.clone(),
                    text: (*text).to_string(),
                }),
                None => {
                    warn!(node = %node.id, child = %child, "dropping dangling child reference");
                    warnings.push(DanglingReference {
                        node_id: node.id.clone(),
                        referenced: child.clone(),
                        kind: ReferenceKind::Child,
                    });
                }
            }
        }

        transformed.push(TransformedNode {
            id: node.id.clone(),
            node_type: node.node_type.clone(),
            text: node.text.clone(),
            is_leaf: node.is_leaf,
            parent,
            childs,
        });
    }

    TransformOutcome {
        nodes: transformed,
        warnings,
    }
}
