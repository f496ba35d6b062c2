//! Generation-model discovery.

use aws_sdk_bedrock::types::FoundationModelLifecycleStatus;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BedrockError;

/// A model usable for tree generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationModel {
    /// Inference profile ID, e.g. `us.anthropic.claude-sonnet-4-6`.
    pub model_id: String,
    /// Human-readable name from the foundation model registry.
    pub name: String,
}

/// List ACTIVE Anthropic foundation models as `us.` inference-profile ids.
///
/// The Converse API only accepts inference-profile ids — bare foundation
/// model ids fail with "on-demand throughput isn't supported" — and every
/// active Anthropic model carries a `us.`-scoped profile, so the profile id
/// is constructed as `us.{model_id}` rather than queried. Context-window
/// variants (ids suffixed `:48k`, `:200k`, …) are skipped. Legacy models
/// are excluded by starting from the ACTIVE registry. Results are sorted
/// by name.
pub async fn list_generation_models(
    config: &aws_config::SdkConfig,
) -> Result<Vec<GenerationModel>, BedrockError> {
    let client = aws_sdk_bedrock::Client::new(config);

    let response = client
        .list_foundation_models()
        .by_provider("anthropic")
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let mut models: Vec<GenerationModel> = response
        .model_summaries()
        .iter()
        .filter(|m| {
            let active = m
                .model_lifecycle()
                .map(|lc| *lc.status() == FoundationModelLifecycleStatus::Active)
                .unwrap_or(false);
            active && !is_context_window_variant(m.model_id())
        })
        .map(|m| GenerationModel {
            model_id: format!("us.{}", m.model_id()),
            name: m.model_name().unwrap_or(m.model_id()).to_string(),
        })
        .collect();

    models.sort_by(|a, b| a.name.cmp(&b.name));

    info!(count = models.len(), "discovered generation models");

    Ok(models)
}

/// `model-id:48k`-style ids are context-window variants of a base model.
fn is_context_window_variant(id: &str) -> bool {
    id.rsplit_once(':').is_some_and(|(_, suffix)| {
        suffix.chars().next().is_some_and(|c| c.is_ascii_digit()) && suffix != "0"
    })
}
