use thiserror::Error;

#[derive(Debug, Error)]
pub enum DoctreenError {
    #[error("more than one root-typed node in the export input")]
    InvalidRoot,

    #[error("could not allocate a unique {kind} after {attempts} attempts")]
    IdGenerationExhausted { kind: &'static str, attempts: usize },

    #[error("failed to insert node {index} of {total}: {message}")]
    NodeInsert {
        index: usize,
        total: usize,
        message: String,
    },

    #[error("failed to insert the tree document: {0}")]
    TreeInsert(String),

    #[error("store query failed: {0}")]
    Persistence(String),
}
