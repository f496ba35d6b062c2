//! Section-text normalizer.
//!
//! Generated section text arrives with model artifacts: reasoning blocks,
//! code-fence backticks, and runs of blank lines. Parsing expects none of
//! them.

use std::sync::LazyLock;

use regex::Regex;

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think-block regex"));

static EXCESS_BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank-run regex"));

/// Strip model artifacts from a generated section.
///
/// Removes `<think>…</think>` reasoning blocks, removes code-fence backtick
/// runs (only the backticks — a stray language word on the fence line is
/// left for the parser to treat as text), and collapses three or more
/// consecutive newlines down to two.
pub fn normalize_section(text: &str) -> String {
    let cleaned = THINK_BLOCK.replace_all(text, "");
    let cleaned = cleaned.trim().replace("```", "");
    EXCESS_BLANK.replace_all(&cleaned, "\n\n").into_owned()
}
