//! Indentation tree parser.
//!
//! Converts normalized indented text into a flat node list, inferring node
//! types and parent/child links from indentation depth and bracketed type
//! annotations. Indentation is counted in leading spaces; tabs are not
//! supported.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TreeError;
use crate::ids::NodeIdAllocator;
use crate::node::{RawNode, node_type};

static BRACKET_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("valid bracket-group regex"));

/// Parse indented section text into nodes, in source order.
///
/// Each non-blank line yields exactly one node. Blank lines are skipped and
/// never reset nesting. Parent resolution uses an explicit stack of
/// (node, indent) pairs: entries with indent ≥ the current line's are
/// popped, and the remaining top — if any — is the parent. This handles
/// dedents of arbitrary size and runs of siblings at equal indent.
///
/// Line shape, outermost first:
/// - a leading `"- "` list marker is stripped and remembered as an
///   option hint;
/// - the *last* `(...)` group on the line is the explicit node type
///   (trimmed, and an empty bracket stays the empty string); it is removed
///   from the display text only when trailing — earlier groups remain
///   embedded in the text;
/// - a trailing colon is stripped from the display text.
///
/// When no annotation is present the type is inferred: `root` when nothing
/// has been parsed yet, else `question` for `?`-suffixed text, else
/// `option` for list-marker lines, else `node`.
///
/// A second parentless node fails the whole parse with
/// [`TreeError::MultipleRoots`]: each section must have exactly one
/// zero-indentation top-level node.
pub fn parse_indentation_tree(
    text: &str,
    ids: &mut NodeIdAllocator,
) -> Result<Vec<RawNode>, TreeError> {
    let mut nodes: Vec<RawNode> = Vec::new();
    // (index into `nodes`, indent)
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut root_seen = false;

    for (line_idx, raw_line) in text.lines().enumerate() {
        if raw_line.trim().is_empty() {
            continue;
        }

        let indent = raw_line.chars().take_while(|&c| c == ' ').count();
        let mut line = raw_line.trim();

        let mut is_list_item = false;
        if let Some(rest) = line.strip_prefix("- ") {
            is_list_item = true;
            line = rest.trim();
        }

        let (display, explicit_type) = split_type_annotation(line);

        // Inference consults the stack *before* it is popped for this line,
        // so only the first line of a section can infer `root`.
        let node_type = match explicit_type {
            Some(t) => t,
            None if stack.is_empty() => node_type::INFERRED_ROOT.to_string(),
            None if display.ends_with('?') => node_type::INFERRED_QUESTION.to_string(),
            None if is_list_item => node_type::INFERRED_OPTION.to_string(),
            None => node_type::INFERRED_NODE.to_string(),
        };

        while stack.last().is_some_and(|&(_, top)| indent <= top) {
            stack.pop();
        }

        let (parent, parent_text) = match stack.last() {
            Some(&(idx, _)) => (
                Some(nodes[idx].id.clone()),
                Some(nodes[idx].text.clone()),
            ),
            None => (None, None),
        };

        if parent.is_none() {
            if root_seen {
                return Err(TreeError::MultipleRoots {
                    line: line_idx + 1,
                    text: display,
                });
            }
            root_seen = true;
        }

        let id = ids.next_id();
        if let Some(&(idx, _)) = stack.last() {
            nodes[idx].childs.push(id.clone());
            nodes[idx].is_leaf = false;
        }

        nodes.push(RawNode {
            id,
            node_type,
            text: display,
            is_leaf: true,
            parent,
            parent_text,
            childs: Vec::new(),
        });
        stack.push((nodes.len() - 1, indent));
    }

    Ok(nodes)
}

/// Split a line into its display text and explicit type annotation.
///
/// The last bracket group on the line carries the type, wherever it sits;
/// it is only removed from the display text when nothing but whitespace
/// follows it. The trailing colon, if any, goes after bracket removal.
fn split_type_annotation(line: &str) -> (String, Option<String>) {
    let mut display = line;
    let mut explicit_type = None;

    if let Some(group) = BRACKET_GROUP.find_iter(line).last() {
        explicit_type = Some(line[group.start() + 1..group.end() - 1].trim().to_string());
        if line[group.end()..].trim().is_empty() {
            display = line[..group.start()].trim_end();
        }
    }

    let display = match display.strip_suffix(':') {
        Some(stripped) => stripped.trim(),
        None => display,
    };

    (display.to_string(), explicit_type)
}
