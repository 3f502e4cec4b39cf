//! Diff markers and the per-level alignment widths derived from them.

use plandiff_types::{ChangeKind, FieldDiff, ObjectDiff};

/// Resolve the marker token and its visible width for a change kind.
///
/// The width counts printable characters only; color tags are excluded, so
/// the value feeds alignment math directly.
pub fn diff_marker(kind: ChangeKind) -> (&'static str, usize) {
    match kind {
        ChangeKind::Added => ("[green]+[reset] ", 2),
        ChangeKind::Deleted => ("[red]-[reset] ", 2),
        ChangeKind::Edited => ("[light_yellow]+/-[reset] ", 4),
        ChangeKind::None => ("", 0),
    }
}

/// Alignment widths for one level of the tree.
///
/// Returns the longest field name and the widest marker among the given
/// fields and objects. Widths are per-level only; sibling subtrees align
/// independently of their cousins.
pub fn longest_prefixes(fields: &[FieldDiff], objects: &[ObjectDiff]) -> (usize, usize) {
    let longest_field = fields
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0);

    let longest_marker = fields
        .iter()
        .map(|f| diff_marker(f.kind).1)
        .chain(objects.iter().map(|o| diff_marker(o.kind).1))
        .max()
        .unwrap_or(0);

    (longest_field, longest_marker)
}
