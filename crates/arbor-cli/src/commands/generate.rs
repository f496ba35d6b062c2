use std::fs;

use arbor_bedrock::driver::{BedrockModel, ExamTreeGenerator};
use arbor_bedrock::progress::TracingProgress;
use arbor_doctreen::convert::DoctreenConverter;
use arbor_doctreen::documents::{NodeDocument, TreeDocument};
use arbor_doctreen::store::MemoryTreeStore;
use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::GenerateArgs;

/// Everything one run persisted, written out as a single reviewable file.
#[derive(Serialize)]
struct DocumentBundle<'a> {
    nodes: &'a [NodeDocument],
    tree: &'a TreeDocument,
    link: &'a str,
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let model = BedrockModel::new(config, &args.model_id);

    let generator = ExamTreeGenerator::new(
        model,
        &args.file_type,
        args.diseases.clone(),
        &args.context,
    );

    let mut progress = TracingProgress;
    let generated = generator.run(&mut progress).await?;
    if !generated.warnings.is_empty() {
        warn!(
            count = generated.warnings.len(),
            "dangling references were dropped from the generated tree"
        );
    }

    let tree_name = args.tree_name.unwrap_or_else(|| args.file_type.clone());
    let converter = DoctreenConverter::new(MemoryTreeStore::new(), &args.owner_id, &tree_name);
    let export = converter.convert(&generated.nodes).await?;

    let bundle = DocumentBundle {
        nodes: &export.nodes,
        tree: &export.tree,
        link: &export.link,
    };
    let json = serde_json::to_string_pretty(&bundle)?;
    fs::write(&args.out, json)
        .wrap_err_with(|| format!("writing bundle to {}", args.out.display()))?;

    info!(
        nodes = export.nodes.len(),
        out = %args.out.display(),
        "document bundle written"
    );
    println!("{}", export.link);

    Ok(())
}
