use std::fmt;

use serde::{Deserialize, Serialize};

/// Node-type vocabulary.
///
/// Explicit annotations in generated text carry the platform's `TYPE_*`
/// names; the parser falls back to the bare `INFERRED_*` words when a line
/// has no annotation. Node types stay plain strings end to end because the
/// parser must preserve whatever the annotation says — including an empty
/// bracket, which yields the empty string.
pub mod node_type {
    pub const ROOT: &str = "TYPE_ROOT";
    pub const TITLE: &str = "TYPE_TITLE";
    pub const TOPIC: &str = "TYPE_TOPIC";
    pub const QUESTION: &str = "TYPE_QUESTION";
    pub const QCM: &str = "TYPE_QCM";
    pub const QCS: &str = "TYPE_QCS";
    pub const MEASURE: &str = "TYPE_MEASURE";
    pub const DATE: &str = "TYPE_DATE";
    pub const TEXT: &str = "TYPE_TEXT";
    pub const OPERATION: &str = "TYPE_OPERATION";
    pub const CALCULATION: &str = "TYPE_CALCULATION";

    pub const INFERRED_ROOT: &str = "root";
    pub const INFERRED_QUESTION: &str = "question";
    pub const INFERRED_OPTION: &str = "option";
    pub const INFERRED_NODE: &str = "node";
}

/// One of the three independently generated subtrees of an exam
/// questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Indication,
    Technical,
    Result,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indication => "INDICATION",
            Self::Technical => "TECHNICAL",
            Self::Result => "RESULT",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed questionnaire node, pre-deduplication.
///
/// `parent_text` is cached at creation time and only participates in
/// deduplication signatures — it is never re-synced if the parent's text
/// changes later. `childs` keeps source order (the field name is the
/// platform's wire vocabulary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub id: String,
    pub node_type: String,
    pub text: String,
    pub is_leaf: bool,
    pub parent: Option<String>,
    pub parent_text: Option<String>,
    pub childs: Vec<String>,
}

/// A denormalized edge: the referenced node's id together with its display
/// text at transform time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
    pub text: String,
}

/// The export-ready node shape: parent and child references expanded into
/// self-describing `NodeRef` pairs, safe to serialize independently of the
/// node mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedNode {
    pub id: String,
    pub node_type: String,
    pub text: String,
    pub is_leaf: bool,
    pub parent: Option<NodeRef>,
    pub childs: Vec<NodeRef>,
}
