use arbor_bedrock::models::list_generation_models;
use eyre::Result;

pub async fn run() -> Result<()> {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let models = list_generation_models(&config).await?;

    for model in &models {
        println!("{}\t{}", model.model_id, model.name);
    }

    Ok(())
}
