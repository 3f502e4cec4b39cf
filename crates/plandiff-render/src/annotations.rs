//! Colorizing of scheduler annotations.

/// Wrap known annotation phrases in their color tags.
///
/// Unknown annotations pass through verbatim. Entries keep their input order
/// and join with `", "`.
pub fn color_annotations(annotations: &[String]) -> String {
    let colored: Vec<String> = annotations
        .iter()
        .map(|annotation| match annotation.as_str() {
            "forces create" => format!("[green]{annotation}[reset]"),
            "forces destroy" => format!("[red]{annotation}[reset]"),
            "forces in-place update" => format!("[cyan]{annotation}[reset]"),
            "forces create/destroy update" => format!("[yellow]{annotation}[reset]"),
            _ => annotation.clone(),
        })
        .collect();

    colored.join(", ")
}
