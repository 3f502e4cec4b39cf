//! Typed nodes of a job plan diff tree.
//!
//! The wire format is a JSON document with PascalCase keys (`Type`, `Fields`,
//! `TaskGroups`, ...). Collections that may arrive as `null` normalize to
//! empty containers during deserialization, so nothing downstream ever sees
//! a nullable reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelResult;
use crate::kind::ChangeKind;

/// Root of a job plan diff tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobDiff {
    /// The job identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Change tag for the job as a whole.
    #[serde(rename = "Type")]
    pub kind: ChangeKind,
    /// Changed job-level fields, in display order.
    #[serde(default, deserialize_with = "null_to_default")]
    pub fields: Vec<FieldDiff>,
    /// Changed job-level objects, in display order.
    #[serde(default, deserialize_with = "null_to_default")]
    pub objects: Vec<ObjectDiff>,
    /// Per-group diffs, in display order.
    #[serde(default, deserialize_with = "null_to_default")]
    pub task_groups: Vec<TaskGroupDiff>,
}

impl JobDiff {
    /// Parse a diff document from its JSON wire form.
    ///
    /// This is the only validation boundary: a document that does not match
    /// the schema fails here, before any rendering happens.
    pub fn from_json(input: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Changes to one task group within a job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskGroupDiff {
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: ChangeKind,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fields: Vec<FieldDiff>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub objects: Vec<ObjectDiff>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tasks: Vec<TaskDiff>,
    /// Scheduler allocation counts keyed by update kind (`"create"`,
    /// `"ignore"`, `"canary"`, ...). Iteration order is lexicographic,
    /// which is also the display order.
    #[serde(default, deserialize_with = "null_to_default")]
    pub updates: BTreeMap<String, u64>,
}

/// Changes to one task within a task group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskDiff {
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: ChangeKind,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fields: Vec<FieldDiff>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub objects: Vec<ObjectDiff>,
    /// Scheduler annotations such as `"forces create/destroy update"`.
    #[serde(default, deserialize_with = "null_to_default")]
    pub annotations: Vec<String>,
}

/// Changes to a nested configuration object.
///
/// Objects nest arbitrarily deep. `fields` is always present on the wire,
/// even when empty; a document missing it is malformed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectDiff {
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: ChangeKind,
    pub fields: Vec<FieldDiff>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub objects: Vec<ObjectDiff>,
}

/// A single changed (or unchanged) scalar field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldDiff {
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: ChangeKind,
    /// Value before the change. Empty when the field was added.
    pub old: String,
    /// Value after the change. Empty when the field was deleted.
    pub new: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub annotations: Vec<String>,
}

/// Accepts `null` (or a missing key) where a collection is expected and
/// substitutes the empty collection.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
