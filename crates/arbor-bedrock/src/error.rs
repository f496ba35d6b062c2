use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

/// Driver-level error: either the model call failed or the generated text
/// could not be assembled into a tree.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Model(#[from] BedrockError),

    #[error("tree assembly failed: {0}")]
    Tree(#[from] arbor_core::error::TreeError),
}
