//! The serializable hand-off produced by the run/export action.

pub mod sink;

pub use sink::*;

use crate::error::SnapshotError;
use crate::graph::{CanvasNode, ConnectionPolicy, Connection, Graph};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};

/// Current layout of [`WorkflowSnapshot`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// A plain, JSON-compatible copy of the canvas at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSnapshot {
    pub version: u32,
    pub policy: ConnectionPolicy,
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<Connection>,
}

/// The encodings a snapshot can be exported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    PrettyJson,
    Json,
    Binary,
}

impl WorkflowSnapshot {
    pub fn capture(graph: &Graph, policy: ConnectionPolicy) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            policy,
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::JsonEncode(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::JsonEncode(e.to_string()))
    }

    pub fn to_value(&self) -> Result<serde_json::Value, SnapshotError> {
        serde_json::to_value(self).map_err(|e| SnapshotError::JsonEncode(e.to_string()))
    }

    /// Decodes a snapshot for a consumer. The editor itself never loads one.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::JsonDecode(e.to_string()))
    }

    /// Compact binary encoding using bincode's standard configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::BinaryEncode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot)
            .map_err(|e| SnapshotError::BinaryDecode(e.to_string()))
    }

    pub fn encode(&self, format: ExportFormat) -> Result<Vec<u8>, SnapshotError> {
        match format {
            ExportFormat::PrettyJson => self.to_json_pretty().map(String::into_bytes),
            ExportFormat::Json => self.to_json().map(String::into_bytes),
            ExportFormat::Binary => self.to_bytes(),
        }
    }
}
