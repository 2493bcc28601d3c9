//! The canvas editor session: placement, dragging, the connect gesture,
//! selection and property edits over a single [`Graph`].

use crate::config::EditorConfig;
use crate::error::{EditorError, SnapshotError};
use crate::geometry::Point;
use crate::graph::{
    CanvasNode, ConfigEdit, ConnectRejection, Connection, Graph, NodeId, RemovedNode,
};
use crate::palette::{Palette, PaletteItem, ParameterDefaults};
use crate::snapshot::{WorkflowSink, WorkflowSnapshot};
use log::{debug, info, warn};

mod builder;
pub mod command;
pub mod outcome;
pub mod state;

pub use builder::EditorBuilder;
pub use command::{CommandOutcome, EditorCommand, Replay};
pub use outcome::*;
pub use state::*;

/// A single-user canvas session.
///
/// The editor is the only writer of its node and edge collections. All methods
/// are synchronous; gestures are modal, so a drag or an armed connection stays
/// in effect until it is released or cancelled.
pub struct CanvasEditor {
    palette: Palette,
    defaults: ParameterDefaults,
    config: EditorConfig,
    graph: Graph,
    selection: Option<NodeId>,
    gesture: ConnectionGesture,
    drag: Option<NodeDrag>,
    in_flight: Option<PaletteItem>,
}

impl CanvasEditor {
    /// An editor over the built-in palette with default settings.
    pub fn new() -> Self {
        Self::from_parts(
            Palette::builtin(),
            ParameterDefaults::new(),
            EditorConfig::default(),
        )
    }

    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    pub(crate) fn from_parts(
        palette: Palette,
        defaults: ParameterDefaults,
        config: EditorConfig,
    ) -> Self {
        Self {
            palette,
            defaults,
            config,
            graph: Graph::new(),
            selection: None,
            gesture: ConnectionGesture::Idle,
            drag: None,
            in_flight: None,
        }
    }

    // --- Read access ---

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn nodes(&self) -> &[CanvasNode] {
        self.graph.nodes()
    }

    pub fn edges(&self) -> &[Connection] {
        self.graph.edges()
    }

    pub fn node(&self, id: NodeId) -> Option<&CanvasNode> {
        self.graph.node(id)
    }

    pub fn gesture(&self) -> ConnectionGesture {
        self.gesture
    }

    pub fn dragging(&self) -> Option<NodeId> {
        self.drag.map(|d| d.node)
    }

    pub fn template_in_flight(&self) -> Option<&PaletteItem> {
        self.in_flight.as_ref()
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// The selected node, read from the canonical node list, so it always
    /// reflects the latest drag position and config edits.
    pub fn selected_node(&self) -> Option<&CanvasNode> {
        self.selection.and_then(|id| self.graph.node(id))
    }

    // --- Palette -> canvas ---

    pub fn begin_palette_drag(&mut self, template: &PaletteItem) {
        debug!("Palette drag started for '{}'", template.id);
        self.in_flight = Some(template.clone());
    }

    /// Starts a palette drag for a template looked up by id.
    pub fn begin_palette_drag_by_id(&mut self, template_id: &str) -> Result<(), EditorError> {
        let template = self
            .palette
            .find(template_id)
            .cloned()
            .ok_or_else(|| EditorError::TemplateNotFound(template_id.to_string()))?;
        self.begin_palette_drag(&template);
        Ok(())
    }

    pub fn cancel_palette_drag(&mut self) -> bool {
        self.in_flight.take().is_some()
    }

    /// Places the template in flight so that its centre lands on `pointer`,
    /// clamped to the non-negative quadrant.
    pub fn drop_on_canvas(&mut self, pointer: Point) -> DropOutcome {
        let Some(template) = self.in_flight.take() else {
            debug!("Drop at {} ignored: no template in flight", pointer);
            return DropOutcome::NoTemplateInFlight;
        };

        let position = (pointer - self.config.node_size.half()).clamped_non_negative();
        let parameters = self.defaults.lookup(&template.id);
        let node = CanvasNode::from_template(&template, position, parameters);
        let id = self.graph.insert_node(node);
        info!("Placed '{}' as node {} at {}", template.id, id, position);
        DropOutcome::Placed { node: id, position }
    }

    // --- Moving nodes ---

    pub fn pointer_down_on_node(
        &mut self,
        node: NodeId,
        pointer: Point,
        button: PointerButton,
    ) -> Result<DragStart, EditorError> {
        let position = self.require_node(node)?.position;
        if button != PointerButton::Primary {
            return Ok(DragStart::IgnoredButton { button });
        }

        let grab_offset = pointer - position;
        self.drag = Some(NodeDrag { node, grab_offset });
        debug!("Drag started on node {} with offset {}", node, grab_offset);
        Ok(DragStart::Started { node, grab_offset })
    }

    /// Moves the dragged node so the grab point follows `pointer`.
    /// Returns the new position, or `None` when no drag is active.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Point> {
        let drag = self.drag?;
        let position = drag.position_for(pointer);
        match self.graph.node_mut(drag.node) {
            Some(node) => {
                node.position = position;
                Some(position)
            }
            None => {
                self.drag = None;
                None
            }
        }
    }

    /// Ends the drag. Positions were applied live, so there is nothing to commit.
    pub fn pointer_up(&mut self) -> Option<NodeId> {
        let drag = self.drag.take()?;
        debug!("Drag ended on node {}", drag.node);
        Some(drag.node)
    }

    // --- Connect gesture ---

    /// Arms connecting mode on `source`. Re-arming replaces the previous source.
    pub fn start_connection(&mut self, source: NodeId) -> Result<(), EditorError> {
        self.require_node(source)?;
        self.gesture = ConnectionGesture::Connecting { source };
        debug!("Connecting from node {}", source);
        Ok(())
    }

    pub fn cancel_connection(&mut self) -> bool {
        let was_armed = self.gesture.is_armed();
        self.gesture = ConnectionGesture::Idle;
        was_armed
    }

    /// Clicks a node: completes the connect gesture if one is armed, otherwise
    /// selects the node.
    pub fn click_node(&mut self, node: NodeId) -> Result<ClickOutcome, EditorError> {
        self.require_node(node)?;

        let ConnectionGesture::Connecting { source } = self.gesture else {
            self.selection = Some(node);
            return Ok(ClickOutcome::Selected { node });
        };

        self.gesture = ConnectionGesture::Idle;
        match self.graph.connect(source, node, &self.config.policy) {
            Ok(edge) => {
                info!("Connected node {} -> {}", source, node);
                Ok(ClickOutcome::Connected {
                    edge,
                    from: source,
                    to: node,
                })
            }
            Err(reason) => {
                if reason != ConnectRejection::SelfLoop {
                    warn!("Connection {} -> {} rejected: {}", source, node, reason);
                }
                Ok(ClickOutcome::Rejected { reason })
            }
        }
    }

    /// Clicks empty canvas: cancels an armed connection, or else clears the selection.
    pub fn click_canvas(&mut self) -> CanvasClickOutcome {
        if let ConnectionGesture::Connecting { source } = self.gesture {
            self.gesture = ConnectionGesture::Idle;
            return CanvasClickOutcome::ConnectionCancelled { source };
        }
        match self.selection.take() {
            Some(node) => CanvasClickOutcome::SelectionCleared { node },
            None => CanvasClickOutcome::Unchanged,
        }
    }

    // --- Selection ---

    pub fn select(&mut self, node: NodeId) -> Result<(), EditorError> {
        self.require_node(node)?;
        self.selection = Some(node);
        Ok(())
    }

    pub fn clear_selection(&mut self) -> Option<NodeId> {
        self.selection.take()
    }

    // --- Deletion ---

    /// Removes `node` and every edge touching it. A selection, drag or armed
    /// connection referring to the node is released as well.
    pub fn delete_node(&mut self, node: NodeId) -> Result<RemovedNode, EditorError> {
        let removed = self
            .graph
            .remove_node(node)
            .ok_or(EditorError::NodeNotFound(node))?;

        if self.selection == Some(node) {
            self.selection = None;
        }
        if self.gesture.source() == Some(node) {
            self.gesture = ConnectionGesture::Idle;
        }
        if self.drag.is_some_and(|d| d.node == node) {
            self.drag = None;
        }

        info!(
            "Deleted node {} and {} connection(s)",
            node,
            removed.edges.len()
        );
        Ok(removed)
    }

    pub fn delete_selected(&mut self) -> Option<RemovedNode> {
        let node = self.selection?;
        self.delete_node(node).ok()
    }

    // --- Property panel ---

    /// Applies a config edit to `node`. Returns whether anything changed.
    pub fn edit_node(&mut self, node: NodeId, edit: ConfigEdit) -> Result<bool, EditorError> {
        let target = self
            .graph
            .node_mut(node)
            .ok_or(EditorError::NodeNotFound(node))?;
        let changed = target.config.apply(edit);
        if changed {
            debug!("Config of node {} updated", node);
        }
        Ok(changed)
    }

    /// Applies a config edit to the selected node; `None` when nothing is selected.
    pub fn edit_selected(&mut self, edit: ConfigEdit) -> Option<bool> {
        let node = self.selection?;
        self.edit_node(node, edit).ok()
    }

    // --- Session ---

    /// Removes every node and edge and resets all transient state.
    pub fn clear(&mut self) {
        self.graph = Graph::new();
        self.selection = None;
        self.gesture = ConnectionGesture::Idle;
        self.drag = None;
        self.in_flight = None;
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot::capture(&self.graph, self.config.policy)
    }

    /// Hands the current snapshot to `sink`. The editor does not interpret it.
    pub fn run(&self, sink: &mut dyn WorkflowSink) -> Result<(), SnapshotError> {
        let snapshot = self.snapshot();
        info!(
            "Handing workflow with {} node(s) and {} connection(s) to '{}'",
            snapshot.nodes.len(),
            snapshot.edges.len(),
            sink.name()
        );
        sink.accept(snapshot)
    }

    fn require_node(&self, id: NodeId) -> Result<&CanvasNode, EditorError> {
        self.graph.node(id).ok_or(EditorError::NodeNotFound(id))
    }
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new()
    }
}
