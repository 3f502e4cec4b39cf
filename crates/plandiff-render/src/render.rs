//! The recursive, alignment-aware renderer.
//!
//! A single depth-first, left-to-right pass over the diff tree. Each level
//! first computes the alignment widths for its direct children, then emits
//! text; the structural indent and the marker-width padding thread downward
//! as plain values. Output carries inline color tags which the
//! [`crate::color`] pass resolves afterwards.

use plandiff_types::{ChangeKind, FieldDiff, JobDiff, ObjectDiff, TaskDiff, TaskGroupDiff};

use crate::annotations::color_annotations;
use crate::marker::{diff_marker, longest_prefixes};

/// Render a job diff to text with inline color tags.
///
/// When `verbose` is set, unchanged and added/deleted subtrees render in
/// full instead of stopping at their headers.
pub fn format_job_diff(job: &JobDiff, verbose: bool) -> String {
    let (marker, _) = diff_marker(job.kind);
    let mut out = format!("{marker}[bold]Job: \"{}\"\n", job.id);

    // Field and object alignment at the job level also accounts for the
    // marker widths of the task group headers below it.
    let (longest_field, mut longest_marker) = longest_prefixes(&job.fields, &job.objects);
    for tg in &job.task_groups {
        longest_marker = longest_marker.max(diff_marker(tg.kind).1);
    }

    // The job's own fields only show when the job itself changed or the
    // caller asked for everything.
    if job.kind == ChangeKind::Edited || verbose {
        let fo = aligned_field_and_objects(
            &job.fields,
            &job.objects,
            0,
            longest_field,
            longest_marker,
        );
        out.push_str(&fo);
        if !fo.is_empty() {
            out.push('\n');
        }
    }

    for tg in &job.task_groups {
        let (_, marker_len) = diff_marker(tg.kind);
        let key_prefix = longest_marker - marker_len;
        out.push_str(&format_task_group_diff(tg, key_prefix, verbose));
        out.push('\n');
    }

    out
}

fn format_task_group_diff(tg: &TaskGroupDiff, tg_prefix: usize, verbose: bool) -> String {
    let (marker, _) = diff_marker(tg.kind);
    let mut out = format!(
        "{marker}{}[bold]Task Group: \"{}\"[reset]",
        " ".repeat(tg_prefix),
        tg.name
    );

    if tg.updates.is_empty() {
        out.push_str("[reset]\n");
    } else {
        // BTreeMap iteration gives the lexicographic display order.
        let updates: Vec<String> = tg
            .updates
            .iter()
            .map(|(kind, count)| format!("[reset]{}{count} {kind}", update_color(kind)))
            .collect();
        out.push_str(&format!(" ({}[reset])\n", updates.join(", ")));
    }

    // Same cross-kind coupling as the job level: task markers widen the
    // alignment for the group's own fields and objects.
    let (longest_field, mut longest_marker) = longest_prefixes(&tg.fields, &tg.objects);
    for task in &tg.tasks {
        longest_marker = longest_marker.max(diff_marker(task.kind).1);
    }

    let sub_start_prefix = tg_prefix + 2;
    if tg.kind == ChangeKind::Edited || verbose {
        let fo = aligned_field_and_objects(
            &tg.fields,
            &tg.objects,
            sub_start_prefix,
            longest_field,
            longest_marker,
        );
        out.push_str(&fo);
        if !fo.is_empty() {
            out.push('\n');
        }
    }

    // Each task owns its own line terminator; nothing is appended between
    // tasks here.
    for task in &tg.tasks {
        let (_, marker_len) = diff_marker(task.kind);
        let prefix = longest_marker - marker_len;
        out.push_str(&format_task_diff(task, sub_start_prefix, prefix, verbose));
    }

    out
}

fn format_task_diff(
    task: &TaskDiff,
    start_prefix: usize,
    task_prefix: usize,
    verbose: bool,
) -> String {
    let (marker, _) = diff_marker(task.kind);
    let mut out = format!(
        "{}{marker}{}[bold]Task: \"{}\"",
        " ".repeat(start_prefix),
        " ".repeat(task_prefix),
        task.name
    );

    if !task.annotations.is_empty() {
        out.push_str(&format!(" [reset]({})", color_annotations(&task.annotations)));
    }

    // Header only for unchanged tasks, and for added or deleted ones unless
    // verbose output was requested.
    match task.kind {
        ChangeKind::None => return out,
        ChangeKind::Added | ChangeKind::Deleted if !verbose => return out,
        _ => {}
    }

    out.push('\n');

    let sub_start_prefix = start_prefix + 2;
    let (longest_field, longest_marker) = longest_prefixes(&task.fields, &task.objects);
    out.push_str(&aligned_field_and_objects(
        &task.fields,
        &task.objects,
        sub_start_prefix,
        longest_field,
        longest_marker,
    ));

    out
}

fn format_object_diff(obj: &ObjectDiff, start_prefix: usize, key_prefix: usize) -> String {
    let (marker, marker_len) = diff_marker(obj.kind);
    let mut out = format!(
        "{}{marker}{}{} {{\n",
        " ".repeat(start_prefix),
        " ".repeat(key_prefix),
        obj.name
    );

    let (longest_field, longest_marker) = longest_prefixes(&obj.fields, &obj.objects);
    let sub_start_prefix = start_prefix + key_prefix + 2;
    out.push_str(&aligned_field_and_objects(
        &obj.fields,
        &obj.objects,
        sub_start_prefix,
        longest_field,
        longest_marker,
    ));

    // The closing brace sits under the content start column; the opening
    // line consumed the marker width before the name.
    let end_prefix = " ".repeat(start_prefix + marker_len + key_prefix);
    format!("{out}\n{end_prefix}}}")
}

fn format_field_diff(
    field: &FieldDiff,
    start_prefix: usize,
    key_prefix: usize,
    value_prefix: usize,
) -> String {
    let (marker, _) = diff_marker(field.kind);
    let mut out = format!(
        "{}{marker}{}{}: {}",
        " ".repeat(start_prefix),
        " ".repeat(key_prefix),
        field.name,
        " ".repeat(value_prefix)
    );

    match field.kind {
        ChangeKind::Added => out.push_str(&format!("\"{}\"", field.new)),
        ChangeKind::Deleted => out.push_str(&format!("\"{}\"", field.old)),
        ChangeKind::Edited => out.push_str(&format!("\"{}\" => \"{}\"", field.old, field.new)),
        ChangeKind::None => out.push_str(&format!("\"{}\"", field.new)),
    }

    if !field.annotations.is_empty() {
        out.push_str(&format!(" ({})", color_annotations(&field.annotations)));
    }

    out
}

/// The single consumer of alignment widths: renders one level's fields, then
/// its objects, padding each entry's marker and value into a shared column.
fn aligned_field_and_objects(
    fields: &[FieldDiff],
    objects: &[ObjectDiff],
    start_prefix: usize,
    longest_field: usize,
    longest_marker: usize,
) -> String {
    let mut out = String::new();
    let have_objects = !objects.is_empty();

    for (i, field) in fields.iter().enumerate() {
        let (_, marker_len) = diff_marker(field.kind);
        let key_prefix = longest_marker - marker_len;
        let value_prefix = longest_field - field.name.chars().count();
        out.push_str(&format_field_diff(field, start_prefix, key_prefix, value_prefix));

        // No dangling newline after the last entry.
        if i + 1 != fields.len() || have_objects {
            out.push('\n');
        }
    }

    for (i, object) in objects.iter().enumerate() {
        let (_, marker_len) = diff_marker(object.kind);
        let key_prefix = longest_marker - marker_len;
        out.push_str(&format_object_diff(object, start_prefix, key_prefix));

        if i + 1 != objects.len() {
            out.push('\n');
        }
    }

    out
}

fn update_color(kind: &str) -> &'static str {
    match kind {
        "ignore" | "create" => "[green]",
        "destroy" => "[red]",
        "migrate" => "[blue]",
        "in-place update" => "[cyan]",
        "create/destroy update" => "[yellow]",
        "canary" => "[light_yellow]",
        _ => "",
    }
}
