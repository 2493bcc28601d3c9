use crate::geometry::Point;
use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// The connect gesture. `Idle` is both the initial and the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ConnectionGesture {
    #[default]
    Idle,
    /// Armed on `source`; the next node click picks the target.
    Connecting { source: NodeId },
}

impl ConnectionGesture {
    pub fn source(&self) -> Option<NodeId> {
        match self {
            ConnectionGesture::Idle => None,
            ConnectionGesture::Connecting { source } => Some(*source),
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, ConnectionGesture::Connecting { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// A node being moved with the pointer. The grab offset keeps the point under
/// the cursor fixed relative to the block for the whole drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDrag {
    pub node: NodeId,
    pub grab_offset: Point,
}

impl NodeDrag {
    pub fn position_for(&self, pointer: Point) -> Point {
        (pointer - self.grab_offset).clamped_non_negative()
    }
}
