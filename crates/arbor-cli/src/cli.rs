use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "arbor",
    version,
    about = "Radiology questionnaire-tree generation for Doctreen"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an exam tree and persist it as Doctreen documents.
    Generate(GenerateArgs),
    /// List Bedrock models usable for generation.
    Models,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Exam file type, e.g. "Thyroid ultrasound".
    #[arg(long)]
    pub file_type: String,

    /// Comma-separated disease or context terms steering the questionnaire.
    #[arg(long, value_delimiter = ',')]
    pub diseases: Vec<String>,

    /// Extra free-text clinical instructions for the model.
    #[arg(long, default_value = "")]
    pub context: String,

    /// Bedrock inference-profile id to generate with (see `arbor models`).
    #[arg(long)]
    pub model_id: String,

    /// Doctreen owner the documents are created under.
    #[arg(long)]
    pub owner_id: String,

    /// Display name for the created tree; defaults to the file type.
    #[arg(long)]
    pub tree_name: Option<String>,

    /// Where the persisted document bundle is written as JSON.
    #[arg(long, default_value = "arbor-tree.json")]
    pub out: PathBuf,
}
