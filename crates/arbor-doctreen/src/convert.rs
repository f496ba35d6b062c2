//! Conversion of export-ready nodes into persisted Doctreen documents.

use std::collections::HashMap;

use arbor_core::node::{TransformedNode, node_type};
use jiff::Timestamp;
use serde_json::Map;
use tracing::{info, warn};
use uuid::Uuid;

use crate::documents::{DefaultReport, NodeDocument, TreeDocument, default_mark_types};
use crate::error::DoctreenError;
use crate::links::edit_link;
use crate::store::TreeStore;

/// Upper bound on collision-checked attempts per generated identifier.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// External vocabulary entries the internal node types narrow into.
pub mod export_type {
    /// The platform spells the measurement type in French.
    pub const MESURE: &str = "TYPE_MESURE";
    /// `TYPE_TOPIC` and `TYPE_QUESTION` both collapse into this generic
    /// interior type.
    pub const NODE: &str = "TYPE_NODE";
}

/// The persisted outcome of one conversion.
#[derive(Debug)]
pub struct DoctreenExport {
    /// Node documents, in input order.
    pub nodes: Vec<NodeDocument>,
    pub tree: TreeDocument,
    /// Shareable editor link for the persisted tree.
    pub link: String,
}

/// Maps a generated questionnaire tree into Doctreen node/tree documents and
/// persists them through a [`TreeStore`].
pub struct DoctreenConverter<S: TreeStore> {
    store: S,
    owner_id: String,
    tree_name: String,
}

impl<S: TreeStore> DoctreenConverter<S> {
    pub fn new(store: S, owner_id: impl Into<String>, tree_name: impl Into<String>) -> Self {
        Self {
            store,
            owner_id: owner_id.into(),
            tree_name: tree_name.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Convert and persist the tree.
    ///
    /// The first pass allocates a collision-checked platform `nodeId` per
    /// node and locates the root — a second `TYPE_ROOT` node fails the whole
    /// conversion before anything is persisted. The second pass inserts one
    /// node document at a time; there is no transaction spanning the tree,
    /// so a failed insert leaves the earlier documents in place and the
    /// error carries the failing position for manual cleanup.
    pub async fn convert(
        &self,
        nodes: &[TransformedNode],
    ) -> Result<DoctreenExport, DoctreenError> {
        let total = nodes.len();

        let mut id_map: HashMap<&str, Uuid> = HashMap::with_capacity(total);
        let mut node_ids = Vec::with_capacity(total);
        let mut root_node_id = None;
        for node in nodes {
            let node_id = self.unique_node_id().await?;
            id_map.insert(node.id.as_str(), node_id);
            node_ids.push(node_id);

            if node.node_type == node_type::ROOT && root_node_id.replace(node_id).is_some() {
                return Err(DoctreenError::InvalidRoot);
            }
        }

        let mut inserted = Vec::with_capacity(total);
        let mut tree_node_ids = Vec::with_capacity(total);
        for (index, node) in nodes.iter().enumerate() {
            let doc = self.node_document(node, node_ids[index], &id_map).await?;
            self.store
                .insert_node(&doc)
                .await
                .map_err(|e| DoctreenError::NodeInsert {
                    index: index + 1,
                    total,
                    message: e.to_string(),
                })?;
            info!(index = index + 1, total, id = %doc.id, "inserted node document");
            tree_node_ids.push(doc.id);
            inserted.push(doc);
        }

        let tree_id = self.unique_tree_id().await?;
        let tree = TreeDocument {
            id: tree_id,
            tree_name: self.tree_name.clone(),
            tags: Vec::new(),
            tree_node_ids,
            description: String::new(),
            public: false,
            disabled: false,
            labels: Map::new(),
            latest: true,
            default_report: DefaultReport { nodes: Vec::new() },
            sub_trees: Vec::new(),
            reports: Vec::new(),
            disabled_reports: Vec::new(),
            last_update: Timestamp::now(),
            software_version: 1,
            line_tree_id: tree_id,
            owner_id: self.owner_id.clone(),
            root_node_id,
        };
        self.store
            .insert_tree(&tree)
            .await
            .map_err(|e| DoctreenError::TreeInsert(e.to_string()))?;

        let link = edit_link(tree_id);
        info!(tree = %tree_id, nodes = inserted.len(), %link, "tree persisted");

        Ok(DoctreenExport {
            nodes: inserted,
            tree,
            link,
        })
    }

    async fn node_document(
        &self,
        node: &TransformedNode,
        node_id: Uuid,
        id_map: &HashMap<&str, Uuid>,
    ) -> Result<NodeDocument, DoctreenError> {
        let id = self.unique_document_id().await?;

        let father_id = node.parent.as_ref().and_then(|parent| {
            let resolved = id_map.get(parent.id.as_str()).copied();
            if resolved.is_none() {
                warn!(node = %node.id, parent = %parent.id, "parent reference unresolved, storing null fatherId");
            }
            resolved
        });

        let mut child_nodes = Vec::with_capacity(node.childs.len());
        for child in &node.childs {
            match id_map.get(child.id.as_str()) {
                Some(child_node_id) => child_nodes.push(*child_node_id),
                None => {
                    warn!(node = %node.id, child = %child.id, "child reference unresolved, skipping");
                }
            }
        }

        Ok(NodeDocument {
            id,
            node_id,
            node_type: narrow_node_type(&node.node_type),
            father_id,
            alias: node.text.clone(),
            value: Map::new(),
            mark_types: default_mark_types(),
            styling: Map::new(),
            owner_id: self.owner_id.clone(),
            child_nodes,
            label_id: None,
            disabled: false,
        })
    }

    async fn unique_node_id(&self) -> Result<Uuid, DoctreenError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = Uuid::new_v4();
            if !self.store.node_id_exists(candidate).await? {
                return Ok(candidate);
            }
        }
        Err(DoctreenError::IdGenerationExhausted {
            kind: "nodeId",
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    async fn unique_document_id(&self) -> Result<Uuid, DoctreenError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = Uuid::new_v4();
            if !self.store.document_id_exists(candidate).await? {
                return Ok(candidate);
            }
        }
        Err(DoctreenError::IdGenerationExhausted {
            kind: "node _id",
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    async fn unique_tree_id(&self) -> Result<Uuid, DoctreenError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = Uuid::new_v4();
            if !self.store.tree_id_exists(candidate).await? {
                return Ok(candidate);
            }
        }
        Err(DoctreenError::IdGenerationExhausted {
            kind: "tree _id",
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

/// Narrow the internal type vocabulary into the platform's.
///
/// Only the explicit platform annotations narrow; inferred bare-word types
/// pass through unchanged, as do the remaining explicit types.
fn narrow_node_type(internal: &str) -> String {
    match internal {
        node_type::MEASURE => export_type::MESURE.to_string(),
        node_type::TOPIC | node_type::QUESTION => export_type::NODE.to_string(),
        other => other.to_string(),
    }
}
