use serde::{Deserialize, Serialize};
use std::fmt;

/// Opt-in structural checks applied when a connection gesture completes.
///
/// Both checks are off by default, so any two distinct nodes may be connected,
/// in either direction and any number of times. Self-loops are always refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionPolicy {
    #[serde(alias = "allow_cycles")]
    pub allow_cycles: bool,
    #[serde(alias = "allow_parallel_edges")]
    pub allow_parallel_edges: bool,
}

impl ConnectionPolicy {
    /// Refuses cycles and duplicate edges.
    pub fn strict() -> Self {
        Self {
            allow_cycles: false,
            allow_parallel_edges: false,
        }
    }
}

impl Default for ConnectionPolicy {
    fn default() -> Self {
        Self {
            allow_cycles: true,
            allow_parallel_edges: true,
        }
    }
}

/// Why a completed connection gesture produced no edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectRejection {
    SelfLoop,
    WouldCreateCycle,
    ParallelEdge,
}

impl fmt::Display for ConnectRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectRejection::SelfLoop => "a node cannot be connected to itself",
            ConnectRejection::WouldCreateCycle => "the connection would close a cycle",
            ConnectRejection::ParallelEdge => "the nodes are already connected in this direction",
        })
    }
}
