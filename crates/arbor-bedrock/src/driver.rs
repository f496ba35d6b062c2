//! Three-pass section generation driver.
//!
//! The passes are strictly sequential: INDICATION refines over several
//! iterations, TECHNICAL is generated once, and RESULT's system prompt
//! embeds the full text of both earlier sections — so no parallelism across
//! passes is possible.

use arbor_core::ids::NodeIdAllocator;
use arbor_core::node::{Section, TransformedNode};
use arbor_core::normalize::normalize_section;
use arbor_core::pipeline::{SectionTexts, build_exam_tree};
use arbor_core::transform::DanglingReference;
use tracing::info;

use crate::converse::generate_text;
use crate::error::{BedrockError, GenerationError};
use crate::progress::{ProgressSink, ProgressUpdate};
use crate::prompts;

/// The opaque text-generation seam: one system + user prompt in, reply out.
#[allow(async_fn_in_trait)]
pub trait TextModel {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, BedrockError>;
}

/// Bedrock-backed [`TextModel`] over the Converse API.
#[derive(Debug, Clone)]
pub struct BedrockModel {
    config: aws_config::SdkConfig,
    model_id: String,
}

impl BedrockModel {
    pub fn new(config: aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            config,
            model_id: model_id.into(),
        }
    }
}

impl TextModel for BedrockModel {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, BedrockError> {
        generate_text(&self.config, &self.model_id, system_prompt, user_prompt).await
    }
}

/// Refinement iteration counts for the three passes.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub indication_iterations: usize,
    pub technical_iterations: usize,
    pub result_iterations: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            indication_iterations: 5,
            technical_iterations: 1,
            result_iterations: 5,
        }
    }
}

impl GeneratorSettings {
    fn total_steps(&self) -> usize {
        self.indication_iterations + self.technical_iterations + self.result_iterations
    }
}

/// The finished, export-ready tree.
#[derive(Debug)]
pub struct GeneratedTree {
    pub nodes: Vec<TransformedNode>,
    pub warnings: Vec<DanglingReference>,
}

/// Drives the three generation passes and the tree pipeline for one exam.
pub struct ExamTreeGenerator<M: TextModel> {
    model: M,
    file_type: String,
    disease_context: Vec<String>,
    clinical_context: String,
    settings: GeneratorSettings,
}

impl<M: TextModel> ExamTreeGenerator<M> {
    pub fn new(
        model: M,
        file_type: impl Into<String>,
        disease_context: Vec<String>,
        clinical_context: impl Into<String>,
    ) -> Self {
        Self {
            model,
            file_type: file_type.into(),
            disease_context,
            clinical_context: clinical_context.into(),
            settings: GeneratorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run all three passes and assemble the combined tree.
    pub async fn run(
        &self,
        progress: &mut dyn ProgressSink,
    ) -> Result<GeneratedTree, GenerationError> {
        let total = self.settings.total_steps();
        let mut step = 0;

        info!(file_type = %self.file_type, "starting tree generation");

        let indication = self.generate_indication(&mut step, total, progress).await?;
        let technical = self.generate_technical(&mut step, total, progress).await?;
        let result = self
            .generate_result(&indication, &technical, &mut step, total, progress)
            .await?;

        let texts = SectionTexts {
            indication,
            technical,
            result,
        };
        let mut ids = NodeIdAllocator::new();
        let outcome = build_exam_tree(&self.file_type, &texts, &mut ids)?;

        info!(nodes = outcome.nodes.len(), "tree generation complete");

        Ok(GeneratedTree {
            nodes: outcome.nodes,
            warnings: outcome.warnings,
        })
    }

    /// Iterative refinement: each iteration's normalized output is embedded
    /// in the next iteration's prompt.
    async fn generate_indication(
        &self,
        step: &mut usize,
        total: usize,
        progress: &mut dyn ProgressSink,
    ) -> Result<String, BedrockError> {
        let system = prompts::indication_system(
            &self.file_type,
            &self.disease_context,
            &self.clinical_context,
        );

        let mut expanded: Option<String> = None;
        for iteration in 0..self.settings.indication_iterations {
            let user = prompts::indication_user(
                iteration,
                self.settings.indication_iterations,
                expanded.as_deref(),
                &self.file_type,
                &self.disease_context,
            );
            let reply = self.model.generate(&system, &user).await?;
            expanded = Some(normalize_section(&reply));

            *step += 1;
            progress.report(ProgressUpdate {
                step: *step,
                total,
                message: format!(
                    "{} iteration {} completed",
                    Section::Indication,
                    iteration + 1
                ),
            });
        }

        Ok(expanded.unwrap_or_default())
    }

    async fn generate_technical(
        &self,
        step: &mut usize,
        total: usize,
        progress: &mut dyn ProgressSink,
    ) -> Result<String, BedrockError> {
        let system = prompts::technical_system(
            &self.file_type,
            &self.disease_context,
            &self.clinical_context,
        );
        let user = prompts::technical_user(&self.file_type, &self.disease_context);

        let mut technical = String::new();
        for iteration in 0..self.settings.technical_iterations {
            let reply = self.model.generate(&system, &user).await?;
            technical = normalize_section(&reply);

            *step += 1;
            progress.report(ProgressUpdate {
                step: *step,
                total,
                message: format!(
                    "{} iteration {} completed",
                    Section::Technical,
                    iteration + 1
                ),
            });
        }

        Ok(technical)
    }

    /// RESULT sees the full INDICATION and TECHNICAL texts for context.
    async fn generate_result(
        &self,
        indication_text: &str,
        technical_text: &str,
        step: &mut usize,
        total: usize,
        progress: &mut dyn ProgressSink,
    ) -> Result<String, BedrockError> {
        let system = prompts::result_system(
            &self.file_type,
            &self.disease_context,
            &self.clinical_context,
            indication_text,
            technical_text,
        );

        let mut result: Option<String> = None;
        for iteration in 0..self.settings.result_iterations {
            let user = prompts::result_user(
                iteration,
                self.settings.result_iterations,
                result.as_deref(),
                &self.file_type,
                &self.disease_context,
            );
            let reply = self.model.generate(&system, &user).await?;
            result = Some(normalize_section(&reply));

            *step += 1;
            progress.report(ProgressUpdate {
                step: *step,
                total,
                message: format!("{} iteration {} completed", Section::Result, iteration + 1),
            });
        }

        Ok(result.unwrap_or_default())
    }
}
