//! The Doctreen document store, at its interface.

use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

use crate::documents::{NodeDocument, TreeDocument};
use crate::error::DoctreenError;

/// The platform's node and tree collections, reduced to what the converter
/// needs: id-uniqueness probes and single-document inserts.
///
/// Inserts are one document at a time with no batching and no transaction
/// spanning a whole tree — a failure partway through leaves the
/// already-inserted documents in place.
#[allow(async_fn_in_trait)]
pub trait TreeStore {
    async fn node_id_exists(&self, node_id: Uuid) -> Result<bool, DoctreenError>;
    async fn document_id_exists(&self, id: Uuid) -> Result<bool, DoctreenError>;
    async fn tree_id_exists(&self, id: Uuid) -> Result<bool, DoctreenError>;
    async fn insert_node(&self, doc: &NodeDocument) -> Result<(), DoctreenError>;
    async fn insert_tree(&self, doc: &TreeDocument) -> Result<(), DoctreenError>;
}

/// In-memory store. Backs tests and local bundle export, where the
/// documents are written out as JSON instead of reaching a live platform.
#[derive(Debug, Default)]
pub struct MemoryTreeStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    node_ids: HashSet<Uuid>,
    document_ids: HashSet<Uuid>,
    tree_ids: HashSet<Uuid>,
    nodes: Vec<NodeDocument>,
    trees: Vec<TreeDocument>,
}

impl MemoryTreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All node documents inserted so far.
    pub fn nodes(&self) -> Vec<NodeDocument> {
        self.inner.lock().expect("store mutex poisoned").nodes.clone()
    }

    /// All tree documents inserted so far.
    pub fn trees(&self) -> Vec<TreeDocument> {
        self.inner.lock().expect("store mutex poisoned").trees.clone()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, Inner>, DoctreenError> {
        self.inner
            .lock()
            .map_err(|_| DoctreenError::Persistence("store mutex poisoned".to_string()))
    }
}

impl TreeStore for MemoryTreeStore {
    async fn node_id_exists(&self, node_id: Uuid) -> Result<bool, DoctreenError> {
        Ok(self.locked()?.node_ids.contains(&node_id))
    }

    async fn document_id_exists(&self, id: Uuid) -> Result<bool, DoctreenError> {
        Ok(self.locked()?.document_ids.contains(&id))
    }

    async fn tree_id_exists(&self, id: Uuid) -> Result<bool, DoctreenError> {
        Ok(self.locked()?.tree_ids.contains(&id))
    }

    async fn insert_node(&self, doc: &NodeDocument) -> Result<(), DoctreenError> {
        let mut inner = self.locked()?;
        inner.node_ids.insert(doc.node_id);
        inner.document_ids.insert(doc.id);
        inner.nodes.push(doc.clone());
        Ok(())
    }

    async fn insert_tree(&self, doc: &TreeDocument) -> Result<(), DoctreenError> {
        let mut inner = self.locked()?;
        inner.tree_ids.insert(doc.id);
        inner.trees.push(doc.clone());
        Ok(())
    }
}
