//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowboard
//! crate. Import this module to get access to the editor without having to import
//! each type individually.

// Editor session and gesture outcomes
pub use crate::editor::{
    CanvasClickOutcome, CanvasEditor, ClickOutcome, CommandOutcome, ConnectionGesture, DragStart,
    DropOutcome, EditorBuilder, EditorCommand, PointerButton, Replay,
};

// Graph model
pub use crate::graph::{
    CanvasNode, ConfigEdit, ConnectRejection, Connection, ConnectionPolicy, EdgeId, Graph,
    NodeConfig, NodeId, RemovedNode,
};

// Palette and defaults
pub use crate::palette::{
    Catalog, Palette, PaletteGroup, PaletteItem, ParameterDefaults, Parameters, TemplateParameters,
    default_parameters,
};

// Geometry and configuration
pub use crate::config::EditorConfig;
pub use crate::geometry::{Point, Size};

// Export
pub use crate::snapshot::{CollectingSink, ExportFormat, WorkflowSink, WorkflowSnapshot, WriterSink};

// Shell state
pub use crate::layout::{LayoutState, LayoutStore};

// Error types
pub use crate::error::{ConfigError, EditorError, ReplayError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
