use serde::{Deserialize, Serialize};

/// The kind of change a diff node carries.
///
/// Every node in a diff tree is tagged with one of these. The tag selects
/// the diff marker and its color, and decides whether the renderer descends
/// into the node's children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// The node is new.
    Added,
    /// The node was removed.
    Deleted,
    /// The node or one of its descendants changed.
    Edited,
    /// No change. Unrecognized wire values also land here.
    #[serde(other)]
    None,
}
