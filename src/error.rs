use crate::graph::NodeId;
use thiserror::Error;

/// Errors raised by editor calls that name something the session does not hold.
///
/// Gesture rejections (self-loops, policy violations, drops with nothing in
/// flight) are not errors; they are reported through the outcome types in
/// [`crate::editor`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Node '{0}' is not placed on the canvas")]
    NodeNotFound(NodeId),

    #[error("Template '{0}' is not part of the palette")]
    TemplateNotFound(String),
}

/// Errors that can occur while encoding or decoding a workflow snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Failed to encode snapshot as JSON: {0}")]
    JsonEncode(String),

    #[error("Failed to decode snapshot JSON: {0}")]
    JsonDecode(String),

    #[error("Failed to encode snapshot as binary: {0}")]
    BinaryEncode(String),

    #[error("Failed to decode binary snapshot: {0}")]
    BinaryDecode(String),

    #[error("Sink '{sink}' refused the snapshot: {message}")]
    SinkRejected { sink: String, message: String },
}

/// Errors that can occur while loading an editor configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse editor config: {0}")]
    Parse(String),

    #[error("Invalid node size {width}x{height}: both sides must be positive")]
    InvalidNodeSize { width: f32, height: f32 },
}

/// Errors that can occur while replaying a scripted editor session.
#[derive(Error, Debug, Clone)]
pub enum ReplayError {
    #[error("Failed to parse replay script: {0}")]
    Parse(String),

    #[error("Step {step}: alias '{alias}' does not name a node created by this script")]
    UnknownAlias { step: usize, alias: String },

    #[error("Step {step}: alias '{alias}' is already bound to another node")]
    DuplicateAlias { step: usize, alias: String },

    #[error("Step {step}: edit names no node and nothing is selected")]
    NoSelection { step: usize },

    #[error("Step {step}: {source}")]
    Editor {
        step: usize,
        #[source]
        source: EditorError,
    },
}
