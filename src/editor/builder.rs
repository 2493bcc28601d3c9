use super::CanvasEditor;
use crate::config::EditorConfig;
use crate::error::ConfigError;
use crate::geometry::Size;
use crate::graph::ConnectionPolicy;
use crate::palette::{Palette, ParameterDefaults, Parameters};

/// Configures a [`CanvasEditor`] before the session starts.
pub struct EditorBuilder {
    palette: Palette,
    defaults: ParameterDefaults,
    config: EditorConfig,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self {
            palette: Palette::builtin(),
            defaults: ParameterDefaults::new(),
            config: EditorConfig::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_node_size(mut self, size: Size) -> Self {
        self.config.node_size = size;
        self
    }

    pub fn with_policy(mut self, policy: ConnectionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Replaces the built-in defaults seeded into nodes dropped from `template_id`.
    pub fn with_default_parameters(mut self, template_id: &str, parameters: Parameters) -> Self {
        self.defaults = self.defaults.with_override(template_id, parameters);
        self
    }

    /// Validates the configuration and starts the session.
    pub fn build(self) -> Result<CanvasEditor, ConfigError> {
        self.config.validate()?;
        Ok(CanvasEditor::from_parts(self.palette, self.defaults, self.config))
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
