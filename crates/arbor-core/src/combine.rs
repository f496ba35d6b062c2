//! Three-way section merge.

use crate::dedup::{DedupResult, deduplicate};
use crate::error::TreeError;
use crate::ids::NodeIdAllocator;
use crate::node::{RawNode, node_type};

/// Merge the three deduplicated section node sets under one synthesized
/// exam root, then deduplicate the union.
///
/// Each section contributes its unique parentless node as a child of the
/// new root; an empty section simply contributes nothing. The second
/// deduplication pass collapses branches duplicated across sections —
/// boilerplate topics that two sections both produced.
pub fn combine_sections(
    file_type: &str,
    indication: Vec<RawNode>,
    technical: Vec<RawNode>,
    result: Vec<RawNode>,
    ids: &mut NodeIdAllocator,
) -> Result<DedupResult, TreeError> {
    let root_id = ids.next_id();
    let mut root = RawNode {
        id: root_id.clone(),
        node_type: node_type::ROOT.to_string(),
        text: file_type.to_string(),
        is_leaf: false,
        parent: None,
        parent_text: None,
        childs: Vec::new(),
    };

    let mut sections = [indication, technical, result];
    for section in &mut sections {
        if let Some(section_root) = section.iter_mut().find(|n| n.parent.is_none()) {
            section_root.parent = Some(root_id.clone());
            section_root.parent_text = Some(file_type.to_string());
            root.childs.push(section_root.id.clone());
        }
    }

    let [indication, technical, result] = sections;
    let mut combined =
        Vec::with_capacity(1 + indication.len() + technical.len() + result.len());
    combined.push(root);
    combined.extend(indication);
    combined.extend(technical);
    combined.extend(result);

    deduplicate(combined)
}
