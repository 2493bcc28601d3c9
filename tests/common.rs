//! Common test utilities for building editor sessions.
use flowboard::prelude::*;

/// Drags `template_id` from the built-in palette and drops it at `(x, y)`.
#[allow(dead_code)]
pub fn place(editor: &mut CanvasEditor, template_id: &str, x: f32, y: f32) -> NodeId {
    editor
        .begin_palette_drag_by_id(template_id)
        .expect("template should be in the palette");
    editor
        .drop_on_canvas(Point::new(x, y))
        .node()
        .expect("drop with a template in flight should place a node")
}

/// Connects `from -> to` through the two-click gesture.
#[allow(dead_code)]
pub fn connect(editor: &mut CanvasEditor, from: NodeId, to: NodeId) -> ClickOutcome {
    editor.start_connection(from).expect("source should exist");
    editor.click_node(to).expect("target should exist")
}

/// An editor holding a three-node chain: forecast -> stock -> schedule.
#[allow(dead_code)]
pub fn create_chain(editor: &mut CanvasEditor) -> (NodeId, NodeId, NodeId) {
    let forecast = place(editor, "demand-forecasting", 150.0, 120.0);
    let stock = place(editor, "inventory-optimization", 400.0, 120.0);
    let schedule = place(editor, "production-scheduling", 650.0, 120.0);
    connect(editor, forecast, stock);
    connect(editor, stock, schedule);
    (forecast, stock, schedule)
}

/// A small palette with one template per catalog.
#[allow(dead_code)]
pub fn create_tiny_palette() -> Palette {
    Palette::from_items(vec![
        PaletteItem::new(
            "alpha",
            "Alpha Module",
            "box",
            "#111111",
            Catalog::FunctionalModules,
            "Core",
        ),
        PaletteItem::new(
            "beta",
            "Beta Agent",
            "bot",
            "#222222",
            Catalog::IntelligentAgents,
            "Bots",
        )
        .with_description("Second template"),
        PaletteItem::new(
            "gamma",
            "Gamma Feed",
            "rss",
            "#333333",
            Catalog::DataConnectors,
            "Feeds",
        ),
    ])
}
