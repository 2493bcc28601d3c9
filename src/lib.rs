//! # flowboard - Headless Node-Graph Canvas Editor
//!
//! **flowboard** implements the interaction logic of a workflow-builder canvas:
//! users drag templates from a palette onto a 2D surface, move the resulting
//! blocks around, wire them together with directed connections, and edit each
//! block's configuration in a property panel. Rendering is left to the host;
//! the editor consumes pointer events and exposes the state to draw.
//!
//! ## Core Workflow
//!
//! 1.  **Build an editor**: `CanvasEditor::builder()` takes a palette, a node
//!     size and a connection policy (or an `EditorConfig` loaded from TOML).
//! 2.  **Feed it gestures**: palette drag and drop, pointer down/move/up on
//!     nodes, node and canvas clicks. Every gesture reports what it did through
//!     an outcome value; rejected gestures (a self-loop, a drop with nothing in
//!     flight) leave the canvas untouched.
//! 3.  **Render**: read `nodes()`, `edges()`, `gesture()` and `selected_node()`.
//! 4.  **Run**: `snapshot()` produces a serializable `WorkflowSnapshot`, and
//!     `run()` hands it to a `WorkflowSink`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowboard::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut editor = CanvasEditor::new();
//!
//!     // Drop two templates from the palette.
//!     editor.begin_palette_drag_by_id("demand-forecasting")?;
//!     let forecast = editor.drop_on_canvas(Point::new(150.0, 120.0)).node().unwrap();
//!     editor.begin_palette_drag_by_id("inventory-optimization")?;
//!     let stock = editor.drop_on_canvas(Point::new(400.0, 120.0)).node().unwrap();
//!
//!     // Connect them with the two-click gesture.
//!     editor.start_connection(forecast)?;
//!     editor.click_node(stock)?;
//!
//!     // Tweak the forecast horizon from the property panel.
//!     editor.select(forecast)?;
//!     editor.edit_selected(ConfigEdit::Parameter {
//!         key: "horizonWeeks".to_string(),
//!         value: "26".to_string(),
//!     });
//!
//!     println!("{}", editor.snapshot().to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod palette;
pub mod prelude;
pub mod snapshot;
