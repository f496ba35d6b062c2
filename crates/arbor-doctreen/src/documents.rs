//! The Doctreen document schema, as persisted.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A persisted tree node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub node_id: Uuid,
    pub node_type: String,
    /// `nodeId` of the parent node, or null for the root.
    pub father_id: Option<Uuid>,
    /// Display text.
    pub alias: String,
    pub value: Map<String, Value>,
    pub mark_types: Map<String, Value>,
    pub styling: Map<String, Value>,
    pub owner_id: String,
    pub child_nodes: Vec<Uuid>,
    pub label_id: Option<String>,
    pub disabled: bool,
}

/// `markTypes` assigned to every generated node.
pub fn default_mark_types() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("MARK_SPACE".to_string(), Value::Bool(true));
    map
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultReport {
    pub nodes: Vec<Value>,
}

/// A persisted tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub tree_name: String,
    pub tags: Vec<String>,
    /// `_id`s of the tree's node documents, in insertion order.
    pub tree_node_ids: Vec<Uuid>,
    pub description: String,
    pub public: bool,
    pub disabled: bool,
    pub labels: Map<String, Value>,
    pub latest: bool,
    pub default_report: DefaultReport,
    pub sub_trees: Vec<Value>,
    pub reports: Vec<Value>,
    pub disabled_reports: Vec<Value>,
    pub last_update: Timestamp,
    #[serde(rename = "software_version")]
    pub software_version: u32,
    /// Same as `_id` for a freshly created tree line.
    pub line_tree_id: Uuid,
    pub owner_id: String,
    /// `nodeId` of the TYPE_ROOT node, when the input carried one.
    pub root_node_id: Option<Uuid>,
}
