//! End-to-end assembly: generated section texts in, export-ready nodes out.

use tracing::info;

use crate::combine::combine_sections;
use crate::dedup::deduplicate;
use crate::error::TreeError;
use crate::ids::NodeIdAllocator;
use crate::node::{RawNode, Section};
use crate::normalize::normalize_section;
use crate::parse::parse_indentation_tree;
use crate::transform::{TransformOutcome, transform_nodes};

/// Raw generated text for the three exam sections.
#[derive(Debug, Clone, Default)]
pub struct SectionTexts {
    pub indication: String,
    pub technical: String,
    pub result: String,
}

/// Run the full tree pipeline over already-generated section texts:
/// normalize, parse, and deduplicate each section, combine them under the
/// exam root, and project the result into the export shape.
///
/// A parse or dedup failure in any section stops the whole pipeline — a
/// partial tree is not usable downstream.
pub fn build_exam_tree(
    file_type: &str,
    texts: &SectionTexts,
    ids: &mut NodeIdAllocator,
) -> Result<TransformOutcome, TreeError> {
    let indication = prepare_section(Section::Indication, &texts.indication, ids)?;
    let technical = prepare_section(Section::Technical, &texts.technical, ids)?;
    let result = prepare_section(Section::Result, &texts.result, ids)?;

    let combined = combine_sections(file_type, indication, technical, result, ids)?;
    info!(nodes = combined.nodes.len(), "combined exam tree assembled");

    Ok(transform_nodes(&combined.nodes))
}

fn prepare_section(
    section: Section,
    text: &str,
    ids: &mut NodeIdAllocator,
) -> Result<Vec<RawNode>, TreeError> {
    let normalized = normalize_section(text);
    let parsed = parse_indentation_tree(&normalized, ids)?;
    let deduped = deduplicate(parsed)?;
    info!(
        section = %section,
        nodes = deduped.nodes.len(),
        "section parsed and deduplicated"
    );
    Ok(deduped.nodes)
}
