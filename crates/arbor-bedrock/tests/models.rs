//! Integration tests for generation-model discovery.
//!
//! These call real AWS APIs and need valid credentials in the environment.
//!
//! Run with: `cargo test -p arbor-bedrock --test models -- --ignored`

use arbor_bedrock::models::list_generation_models;

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

/// Every discovered model must be addressed through a `us.` inference
/// profile id.
#[tokio::test]
#[ignore]
async fn discovered_models_use_inference_profile_ids() {
    let config = build_config().await;
    let models = list_generation_models(&config)
        .await
        .expect("list_generation_models should succeed");

    assert!(!models.is_empty());
    for m in &models {
        assert!(
            m.model_id.starts_with("us."),
            "model ID should start with 'us.' but got: {}",
            m.model_id
        );
    }
}

/// Context-window variants must not appear.
#[tokio::test]
#[ignore]
async fn discovered_models_exclude_context_window_variants() {
    let config = build_config().await;
    let models = list_generation_models(&config)
        .await
        .expect("list_generation_models should succeed");

    for m in &models {
        let variant = m
            .model_id
            .rsplit_once(':')
            .is_some_and(|(_, suffix)| suffix.chars().next().is_some_and(|c| c.is_ascii_digit()) && suffix != "0");
        assert!(!variant, "unexpected variant id: {}", m.model_id);
    }
}
