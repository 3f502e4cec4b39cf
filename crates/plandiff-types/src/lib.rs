//! Diff tree model for job plan rendering.
//!
//! This crate defines the typed nodes of a job plan diff document: the
//! hierarchy of job, task group, task, object, and field changes produced by
//! a scheduler's plan endpoint. A tree is parsed once at the boundary and is
//! read-only afterwards; the renderer crate walks it without mutation.
//!
//! # Key Types
//!
//! - [`JobDiff`] — Root of a diff tree, parsed via [`JobDiff::from_json`]
//! - [`TaskGroupDiff`] / [`TaskDiff`] — Per-group and per-task changes
//! - [`ObjectDiff`] / [`FieldDiff`] — Nested object and leaf field changes
//! - [`ChangeKind`] — The shared change tag driving markers and recursion
//! - [`ModelError`] — Failures at the deserialization boundary

pub mod error;
pub mod kind;
pub mod model;

pub use error::{ModelError, ModelResult};
pub use kind::ChangeKind;
pub use model::{FieldDiff, JobDiff, ObjectDiff, TaskDiff, TaskGroupDiff};
