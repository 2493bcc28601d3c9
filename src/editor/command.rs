//! A serializable command vocabulary for driving an editor from a script.
//!
//! Scripts cannot know the random ids the editor assigns, so nodes are named by
//! aliases chosen when they are dropped:
//!
//! ```json
//! [
//!   { "op": "place", "template": "demand-forecasting", "x": 150, "y": 120, "alias": "forecast" },
//!   { "op": "place", "template": "inventory-optimization", "x": 400, "y": 120, "alias": "stock" },
//!   { "op": "startConnection", "node": "forecast" },
//!   { "op": "clickNode", "node": "stock" }
//! ]
//! ```

use super::{CanvasClickOutcome, CanvasEditor, ClickOutcome, DragStart, DropOutcome, PointerButton};
use crate::error::{EditorError, ReplayError};
use crate::geometry::Point;
use crate::graph::{ConfigEdit, NodeId};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditorCommand {
    BeginPaletteDrag {
        template: String,
    },
    CancelPaletteDrag,
    Drop {
        x: f32,
        y: f32,
        #[serde(default)]
        alias: Option<String>,
    },
    /// Shorthand for `beginPaletteDrag` followed by `drop`.
    Place {
        template: String,
        x: f32,
        y: f32,
        #[serde(default)]
        alias: Option<String>,
    },
    PointerDown {
        node: String,
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    StartConnection {
        node: String,
    },
    CancelConnection,
    ClickNode {
        node: String,
    },
    ClickCanvas,
    Select {
        node: String,
    },
    ClearSelection,
    Delete {
        node: String,
    },
    /// Edits `node`, or the current selection when `node` is omitted.
    Edit {
        #[serde(default)]
        node: Option<String>,
        edit: ConfigEdit,
    },
}

/// What a single command did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "camelCase")]
pub enum CommandOutcome {
    Drop(DropOutcome),
    DragStart(DragStart),
    Moved(Option<Point>),
    Click(ClickOutcome),
    CanvasClick(CanvasClickOutcome),
    Deleted { node: NodeId, connections: usize },
    Edited { changed: bool },
    /// A state toggle; `true` when the command had an effect.
    Toggled(bool),
    Done,
}

/// Replays command scripts against an editor, tracking script-local aliases.
#[derive(Debug, Default)]
pub struct Replay {
    aliases: AHashMap<String, NodeId>,
}

impl Replay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_script(json: &str) -> Result<Vec<EditorCommand>, ReplayError> {
        serde_json::from_str(json).map_err(|e| ReplayError::Parse(e.to_string()))
    }

    pub fn alias(&self, name: &str) -> Option<NodeId> {
        self.aliases.get(name).copied()
    }

    /// Applies `commands` in order, stopping at the first error.
    pub fn run(
        &mut self,
        editor: &mut CanvasEditor,
        commands: Vec<EditorCommand>,
    ) -> Result<Vec<CommandOutcome>, ReplayError> {
        commands
            .into_iter()
            .enumerate()
            .map(|(step, command)| self.apply(editor, step, command))
            .collect()
    }

    pub fn apply(
        &mut self,
        editor: &mut CanvasEditor,
        step: usize,
        command: EditorCommand,
    ) -> Result<CommandOutcome, ReplayError> {
        let wrap = |source: EditorError| ReplayError::Editor { step, source };

        let outcome = match command {
            EditorCommand::BeginPaletteDrag { template } => {
                editor.begin_palette_drag_by_id(&template).map_err(wrap)?;
                CommandOutcome::Done
            }
            EditorCommand::CancelPaletteDrag => {
                CommandOutcome::Toggled(editor.cancel_palette_drag())
            }
            EditorCommand::Drop { x, y, alias } => {
                self.drop_at(editor, step, Point::new(x, y), alias)?
            }
            EditorCommand::Place {
                template,
                x,
                y,
                alias,
            } => {
                editor.begin_palette_drag_by_id(&template).map_err(wrap)?;
                self.drop_at(editor, step, Point::new(x, y), alias)?
            }
            EditorCommand::PointerDown { node, x, y, button } => {
                let id = self.resolve(step, &node)?;
                let start = editor
                    .pointer_down_on_node(id, Point::new(x, y), button)
                    .map_err(wrap)?;
                CommandOutcome::DragStart(start)
            }
            EditorCommand::PointerMove { x, y } => {
                CommandOutcome::Moved(editor.pointer_move(Point::new(x, y)))
            }
            EditorCommand::PointerUp => CommandOutcome::Toggled(editor.pointer_up().is_some()),
            EditorCommand::StartConnection { node } => {
                let id = self.resolve(step, &node)?;
                editor.start_connection(id).map_err(wrap)?;
                CommandOutcome::Done
            }
            EditorCommand::CancelConnection => CommandOutcome::Toggled(editor.cancel_connection()),
            EditorCommand::ClickNode { node } => {
                let id = self.resolve(step, &node)?;
                CommandOutcome::Click(editor.click_node(id).map_err(wrap)?)
            }
            EditorCommand::ClickCanvas => CommandOutcome::CanvasClick(editor.click_canvas()),
            EditorCommand::Select { node } => {
                let id = self.resolve(step, &node)?;
                editor.select(id).map_err(wrap)?;
                CommandOutcome::Done
            }
            EditorCommand::ClearSelection => {
                CommandOutcome::Toggled(editor.clear_selection().is_some())
            }
            EditorCommand::Delete { node } => {
                let id = self.resolve(step, &node)?;
                let removed = editor.delete_node(id).map_err(wrap)?;
                self.aliases.retain(|_, bound| *bound != id);
                CommandOutcome::Deleted {
                    node: id,
                    connections: removed.edges.len(),
                }
            }
            EditorCommand::Edit { node, edit } => {
                let changed = match node {
                    Some(alias) => {
                        let id = self.resolve(step, &alias)?;
                        editor.edit_node(id, edit).map_err(wrap)?
                    }
                    None => editor
                        .edit_selected(edit)
                        .ok_or(ReplayError::NoSelection { step })?,
                };
                CommandOutcome::Edited { changed }
            }
        };
        Ok(outcome)
    }

    fn drop_at(
        &mut self,
        editor: &mut CanvasEditor,
        step: usize,
        pointer: Point,
        alias: Option<String>,
    ) -> Result<CommandOutcome, ReplayError> {
        if let Some(name) = &alias {
            if self.aliases.contains_key(name) {
                return Err(ReplayError::DuplicateAlias {
                    step,
                    alias: name.clone(),
                });
            }
        }

        let outcome = editor.drop_on_canvas(pointer);
        if let (Some(name), Some(node)) = (alias, outcome.node()) {
            self.aliases.insert(name, node);
        }
        Ok(CommandOutcome::Drop(outcome))
    }

    fn resolve(&self, step: usize, alias: &str) -> Result<NodeId, ReplayError> {
        self.alias(alias).ok_or_else(|| ReplayError::UnknownAlias {
            step,
            alias: alias.to_string(),
        })
    }
}
