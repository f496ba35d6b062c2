//! Signature-based node deduplication.
//!
//! A node's identity for merging purposes is the tuple (text, type, parent
//! text, signatures of its children), computed bottom-up: two nodes carrying
//! structurally identical subtrees under same-named parents are the same
//! entity. The first-encountered instance, in node creation order, survives
//! as canonical; every reference to a duplicate is rewritten to it.

use std::collections::{HashMap, HashSet};

use crate::error::TreeError;
use crate::node::RawNode;

/// Surviving canonical nodes, in first-seen order, plus the total alias map:
/// every input id — canonical ids included, mapping to themselves — resolves
/// to its canonical id.
#[derive(Debug)]
pub struct DedupResult {
    pub nodes: Vec<RawNode>,
    pub aliases: HashMap<String, String>,
}

/// Structural fingerprint of one node. Child entries are interned signature
/// ids, so equal subtrees compare in O(children) regardless of depth.
#[derive(Hash, PartialEq, Eq)]
struct SignatureKey {
    text: String,
    node_type: String,
    parent_text: Option<String>,
    children: Vec<u64>,
}

/// Collapse structurally identical nodes into canonical representatives.
///
/// Deterministic for a fixed input order, and idempotent: re-running on its
/// own output changes nothing. Child lists of surviving nodes are rewritten
/// through the alias map with repeats dropped, preserving first occurrence.
///
/// Fails with [`TreeError::UnknownNode`] when a child id is absent from the
/// input, and with [`TreeError::CyclicTree`] when the child graph is not
/// acyclic — malformed input rather than a parser product.
pub fn deduplicate(nodes: Vec<RawNode>) -> Result<DedupResult, TreeError> {
    let order: Vec<String> = nodes.iter().map(|n| n.id.clone()).collect();
    let mut by_id: HashMap<String, RawNode> =
        nodes.into_iter().map(|n| (n.id.clone(), n)).collect();

    let signatures = resolve_signatures(&order, &by_id)?;

    // First-seen-wins canonical selection over creation order.
    let mut canonical_for: HashMap<u64, String> = HashMap::new();
    let mut aliases: HashMap<String, String> = HashMap::new();
    for id in &order {
        let sig = signatures[id];
        let canonical = canonical_for.entry(sig).or_insert_with(|| id.clone());
        aliases.insert(id.clone(), canonical.clone());
    }

    // Rewrite every child list through the alias map, dropping repeats while
    // preserving first occurrence. Parent pointers are left untouched; the
    // transformer surfaces any pointer that ends up dangling.
    for id in &order {
        let Some(node) = by_id.get_mut(id) else {
            continue;
        };
        let mut seen = HashSet::new();
        let mut rewritten = Vec::with_capacity(node.childs.len());
        for child in &node.childs {
            let canonical = aliases
                .get(child)
                .ok_or_else(|| TreeError::UnknownNode { id: child.clone() })?
                .clone();
            if seen.insert(canonical.clone()) {
                rewritten.push(canonical);
            }
        }
        node.childs = rewritten;
    }

    let mut surviving = Vec::new();
    for id in &order {
        if aliases.get(id).is_some_and(|canonical| canonical == id) {
            if let Some(node) = by_id.remove(id) {
                surviving.push(node);
            }
        }
    }

    Ok(DedupResult {
        nodes: surviving,
        aliases,
    })
}

/// Memoized post-order signature resolution, as an explicit traversal.
///
/// Children must resolve before their parent since the parent's signature
/// embeds theirs. The in-progress set catches a node revisited while still
/// being resolved — a cycle — instead of recursing without bound.
fn resolve_signatures(
    order: &[String],
    by_id: &HashMap<String, RawNode>,
) -> Result<HashMap<String, u64>, TreeError> {
    let mut interned: HashMap<SignatureKey, u64> = HashMap::new();
    let mut resolved: HashMap<String, u64> = HashMap::new();
    let mut in_progress: HashSet<String> = HashSet::new();

    for start in order {
        if resolved.contains_key(start) {
            continue;
        }

        // (id, children already expanded)
        let mut stack: Vec<(String, bool)> = vec![(start.clone(), false)];
        while let Some((id, expanded)) = stack.pop() {
            let node = by_id
                .get(&id)
                .ok_or_else(|| TreeError::UnknownNode { id: id.clone() })?;

            if expanded {
                let mut children = Vec::with_capacity(node.childs.len());
                for child in &node.childs {
                    let sig = resolved
                        .get(child)
                        .ok_or_else(|| TreeError::UnknownNode { id: child.clone() })?;
                    children.push(*sig);
                }
                let key = SignatureKey {
                    text: node.text.clone(),
                    node_type: node.node_type.clone(),
                    parent_text: node.parent_text.clone(),
                    children,
                };
                let next = interned.len() as u64;
                let sig = *interned.entry(key).or_insert(next);
                resolved.insert(id.clone(), sig);
                in_progress.remove(&id);
                continue;
            }

            if resolved.contains_key(&id) {
                continue;
            }
            if !in_progress.insert(id.clone()) {
                return Err(TreeError::CyclicTree { id });
            }

            stack.push((id.clone(), true));
            for child in node.childs.iter().rev() {
                if !resolved.contains_key(child) {
                    stack.push((child.clone(), false));
                }
            }
        }
    }

    Ok(resolved)
}
