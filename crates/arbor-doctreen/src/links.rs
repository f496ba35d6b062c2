//! Doctreen link conventions.
//!
//! Pure string functions — no store dependency.

use uuid::Uuid;

pub const EDIT_BASE_URL: &str = "https://front.interns.doctreen.io/edit/";

/// Shareable editor link for a persisted tree.
pub fn edit_link(tree_id: Uuid) -> String {
    format!("{EDIT_BASE_URL}{tree_id}")
}
