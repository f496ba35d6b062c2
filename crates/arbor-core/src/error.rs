use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("line {line} ({text:?}) would create a second parentless node")]
    MultipleRoots { line: usize, text: String },

    #[error("cycle detected while resolving the signature of node {id}")]
    CyclicTree { id: String },

    #[error("node {id} is referenced but missing from the node set")]
    UnknownNode { id: String },
}
