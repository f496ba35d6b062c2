use arbor_core::normalize::normalize_section;

#[test]
fn think_blocks_are_removed() {
    let text = "<think>\nLet me plan the tree.\n</think>\nINDICATION: (TYPE_TITLE)\n    Age: (TYPE_QUESTION)";
    let cleaned = normalize_section(text);

    assert!(!cleaned.contains("<think>"));
    assert!(cleaned.starts_with("INDICATION:"));
}

#[test]
fn code_fence_backticks_are_removed() {
    let text = "```\nINDICATION: (TYPE_TITLE)\n```";
    let cleaned = normalize_section(text);

    assert!(!cleaned.contains("```"));
    assert!(cleaned.contains("INDICATION: (TYPE_TITLE)"));
}

#[test]
fn blank_line_runs_collapse_to_one_blank_line() {
    let text = "A\n\n\n\nB";
    assert_eq!(normalize_section(text), "A\n\nB");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let text = "\n\n  INDICATION: (TYPE_TITLE)\n    Age: (TYPE_QUESTION)\n\n";
    let cleaned = normalize_section(text);
    assert!(cleaned.starts_with("INDICATION:"));
    assert!(cleaned.ends_with("(TYPE_QUESTION)"));
}

#[test]
fn applying_twice_changes_nothing() {
    let text = "<think>reasoning</think>\nROOT: (TYPE_TITLE)\n\n\n\n    Leaf (TYPE_TEXT)";
    let once = normalize_section(text);
    assert_eq!(normalize_section(&once), once);
}
