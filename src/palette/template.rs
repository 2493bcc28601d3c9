use serde::{Deserialize, Serialize};
use std::fmt;

/// The three catalogs the palette is organised into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Catalog {
    /// Planning modules such as forecasting or scheduling.
    FunctionalModules,
    /// Assistants that analyse or act on planning data.
    IntelligentAgents,
    /// Sources and sinks for external data.
    DataConnectors,
}

impl Catalog {
    /// All catalogs, in display order.
    pub const ALL: [Catalog; 3] = [
        Catalog::FunctionalModules,
        Catalog::IntelligentAgents,
        Catalog::DataConnectors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Catalog::FunctionalModules => "Functional Modules",
            Catalog::IntelligentAgents => "Intelligent Agents",
            Catalog::DataConnectors => "Data Connectors",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable template describing a kind of block that can be placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub catalog: Catalog,
    /// Display grouping inside the catalog (e.g. "Planning", "Warehouse").
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PaletteItem {
    pub fn new(
        id: &str,
        name: &str,
        icon: &str,
        color: &str,
        catalog: Catalog,
        category: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            catalog,
            category: category.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Case-insensitive substring match on the template name.
    /// `needle` must already be lowercased.
    pub(crate) fn name_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}
