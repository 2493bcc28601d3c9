use crate::geometry::Point;
use crate::palette::{PaletteItem, Parameters};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies a node placed on the canvas. Unique for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The user-editable settings shown in the property panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    pub name: String,
    pub description: String,
    pub parameters: Parameters,
}

/// A single property-panel edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum ConfigEdit {
    Name { value: String },
    Description { value: String },
    Parameter { key: String, value: String },
    RemoveParameter { key: String },
}

impl NodeConfig {
    /// Applies `edit` in place. Returns `false` if nothing changed.
    pub fn apply(&mut self, edit: ConfigEdit) -> bool {
        match edit {
            ConfigEdit::Name { value } => replace_if_changed(&mut self.name, value),
            ConfigEdit::Description { value } => replace_if_changed(&mut self.description, value),
            ConfigEdit::Parameter { key, value } => {
                if self.parameters.get(&key) == Some(&value) {
                    false
                } else {
                    self.parameters.insert(key, value);
                    true
                }
            }
            ConfigEdit::RemoveParameter { key } => self.parameters.remove(&key).is_some(),
        }
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// An instantiated palette template, positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    pub id: NodeId,
    pub template_id: String,
    pub display_name: String,
    pub position: Point,
    pub config: NodeConfig,
}

impl CanvasNode {
    pub fn from_template(template: &PaletteItem, position: Point, parameters: Parameters) -> Self {
        Self {
            id: NodeId::new(),
            template_id: template.id.clone(),
            display_name: template.name.clone(),
            position,
            config: NodeConfig {
                name: template.name.clone(),
                description: template.description.clone().unwrap_or_default(),
                parameters,
            },
        }
    }
}
