//! Aligned, colorized text rendering of job plan diff trees.
//!
//! Takes an already-parsed [`JobDiff`] tree and produces a human-readable
//! report: one header per job, task group, and task, with field and object
//! changes aligned into columns and prefixed by `+` / `-` / `+/-` markers.
//! Rendering is a pure, single-pass tree walk; color is handled by neutral
//! inline tags resolved in a final substitution pass.
//!
//! # Key Entry Points
//!
//! - [`format`] — Render a tree to its final text form (plain or ANSI)
//! - [`format_job_diff`] — The tag-bearing renderer underneath
//! - [`strip_colors`] / [`colorize`] — The tag post-pass
//! - [`color_annotations`] / [`diff_marker`] / [`longest_prefixes`] —
//!   The building blocks, exposed for reuse

pub mod annotations;
pub mod color;
pub mod marker;
pub mod render;

pub use annotations::color_annotations;
pub use color::{colorize, strip_colors, COLOR_TAGS};
pub use marker::{diff_marker, longest_prefixes};
pub use render::format_job_diff;

use plandiff_types::JobDiff;

/// Render a job diff to its final text form.
///
/// `colors` selects between ANSI escape output and plain text; `verbose`
/// renders unchanged and added/deleted subtrees in full.
pub fn format(job: &JobDiff, colors: bool, verbose: bool) -> String {
    let out = render::format_job_diff(job, verbose);
    if colors {
        color::colorize(&out)
    } else {
        color::strip_colors(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A captured plan diff for a service job: one edited task group with an
    // unchanged statsd task and an edited service task whose Config and
    // Service objects both changed.
    const SERVICE_DIFF: &str = r#"{
        "Type": "Edited",
        "ID": "service",
        "Fields": null,
        "Objects": null,
        "TaskGroups": [
            {
                "Type": "Edited",
                "Name": "service",
                "Fields": null,
                "Objects": null,
                "Tasks": [
                    {"Type": "None", "Name": "statsd", "Fields": null, "Objects": null, "Annotations": null},
                    {
                        "Type": "Edited",
                        "Name": "service",
                        "Fields": null,
                        "Objects": [
                            {
                                "Type": "Edited",
                                "Name": "Config",
                                "Fields": [
                                    {"Type": "Edited", "Name": "image", "Old": "OLD_REF", "New": "NEW_REF", "Annotations": null},
                                    {"Type": "None", "Name": "logging[0][config][0][env-regex]", "Old": "^(NOMAD_META_[A-Z]*|NOMAD_ALLOC_ID|NOMAD_ALLOC_NAME)", "New": "^(NOMAD_META_[A-Z]*|NOMAD_ALLOC_ID|NOMAD_ALLOC_NAME)", "Annotations": null},
                                    {"Type": "None", "Name": "logging[0][config][0][max-file]", "Old": "2", "New": "2", "Annotations": null},
                                    {"Type": "None", "Name": "logging[0][config][0][max-size]", "Old": "2m", "New": "2m", "Annotations": null},
                                    {"Type": "None", "Name": "logging[0][config][0][mode]", "Old": "non-blocking", "New": "non-blocking", "Annotations": null},
                                    {"Type": "None", "Name": "logging[0][type]", "Old": "json-file", "New": "json-file", "Annotations": null},
                                    {"Type": "None", "Name": "ports[0]", "Old": "service", "New": "service", "Annotations": null}
                                ],
                                "Objects": null
                            },
                            {
                                "Type": "Edited",
                                "Name": "Service",
                                "Fields": [
                                    {"Type": "None", "Name": "AddressMode", "Old": "auto", "New": "auto", "Annotations": null},
                                    {"Type": "None", "Name": "EnableTagOverride", "Old": "false", "New": "false", "Annotations": null},
                                    {"Type": "Edited", "Name": "Meta[version]", "Old": "OLD_REF", "New": "NEW_REF", "Annotations": null},
                                    {"Type": "None", "Name": "Name", "Old": "service", "New": "service", "Annotations": null},
                                    {"Type": "None", "Name": "PortLabel", "Old": "service", "New": "service", "Annotations": null},
                                    {"Type": "None", "Name": "TaskName", "Old": "", "New": "", "Annotations": null}
                                ],
                                "Objects": [
                                    {
                                        "Type": "None",
                                        "Name": "Tags",
                                        "Fields": [
                                            {"Type": "None", "Name": "Tags", "Old": "SOME_TAG", "New": "SOME_TAG", "Annotations": null},
                                            {"Type": "None", "Name": "Tags", "Old": "SOME_OTHER_TAG", "New": "SOME_OTHER_TAG", "Annotations": null}
                                        ],
                                        "Objects": null
                                    }
                                ]
                            }
                        ],
                        "Annotations": ["forces create/destroy update"]
                    }
                ],
                "Updates": {"create/destroy update": 1, "ignore": 3}
            }
        ]
    }"#;

    const SERVICE_RENDERED: &str = r#"+/- Job: "service"
+/- Task Group: "service" (1 create/destroy update, 3 ignore)
      Task: "statsd"  +/- Task: "service" (forces create/destroy update)
    +/- Config {
      +/- image:                            "OLD_REF" => "NEW_REF"
          logging[0][config][0][env-regex]: "^(NOMAD_META_[A-Z]*|NOMAD_ALLOC_ID|NOMAD_ALLOC_NAME)"
          logging[0][config][0][max-file]:  "2"
          logging[0][config][0][max-size]:  "2m"
          logging[0][config][0][mode]:      "non-blocking"
          logging[0][type]:                 "json-file"
          ports[0]:                         "service"
        }
    +/- Service {
          AddressMode:       "auto"
          EnableTagOverride: "false"
      +/- Meta[version]:     "OLD_REF" => "NEW_REF"
          Name:              "service"
          PortLabel:         "service"
          TaskName:          ""
          Tags {
            Tags: "SOME_TAG"
            Tags: "SOME_OTHER_TAG"
          }
        }
"#;

    #[test]
    fn service_diff_renders_exactly() {
        let job = JobDiff::from_json(SERVICE_DIFF).unwrap();
        assert_eq!(format(&job, false, false), SERVICE_RENDERED);
    }

    #[test]
    fn colorized_output_carries_ansi_escapes() {
        let job = JobDiff::from_json(SERVICE_DIFF).unwrap();
        let out = format(&job, true, false);

        assert!(out.contains("\x1b[93m+/-\x1b[0m \x1b[1mJob: \"service\""));
        assert!(out.contains("\x1b[33m1 create/destroy update"));
        assert!(!out.contains("[bold]"));
        assert!(!out.contains("[reset]"));
    }

    #[test]
    fn colorizing_never_changes_visible_text() {
        let job = JobDiff::from_json(SERVICE_DIFF).unwrap();

        let plain = format(&job, false, false);
        let mut colorized = format(&job, true, false);
        for code in ["\x1b[32m", "\x1b[31m", "\x1b[34m", "\x1b[36m", "\x1b[33m", "\x1b[93m", "\x1b[1m", "\x1b[0m"] {
            colorized = colorized.replace(code, "");
        }

        assert_eq!(colorized, plain);
    }

    #[test]
    fn verbose_renders_unchanged_subtrees() {
        let job = JobDiff::from_json(SERVICE_DIFF).unwrap();
        let out = format(&job, false, true);

        // The statsd task is unchanged and stays header-only either way,
        // but the job now renders its (empty) field block and the service
        // task keeps its children.
        assert!(out.contains("Task: \"statsd\""));
        assert!(out.contains("+/- image:"));
    }
}
