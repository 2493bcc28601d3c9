use super::state::PointerButton;
use crate::geometry::Point;
use crate::graph::{ConnectRejection, EdgeId, NodeId};
use serde::Serialize;

/// Result of dropping onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DropOutcome {
    Placed { node: NodeId, position: Point },
    /// Nothing was being dragged from the palette; the canvas is unchanged.
    NoTemplateInFlight,
}

impl DropOutcome {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            DropOutcome::Placed { node, .. } => Some(*node),
            DropOutcome::NoTemplateInFlight => None,
        }
    }
}

/// Result of a pointer-down on a placed node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DragStart {
    Started { node: NodeId, grab_offset: Point },
    /// Only the primary button moves nodes.
    IgnoredButton { button: PointerButton },
}

/// Result of clicking a placed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ClickOutcome {
    /// Not connecting: the node became the selection.
    Selected { node: NodeId },
    /// Connecting: a new edge `from -> to` was added.
    Connected { edge: EdgeId, from: NodeId, to: NodeId },
    /// Connecting: the gesture ended without an edge.
    Rejected { reason: ConnectRejection },
}

/// Result of clicking empty canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum CanvasClickOutcome {
    ConnectionCancelled { source: NodeId },
    SelectionCleared { node: NodeId },
    Unchanged,
}
