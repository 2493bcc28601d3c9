//! Tests for scripted command replay.
use flowboard::prelude::*;

const SCENARIO_SCRIPT: &str = r#"[
    { "op": "place", "template": "demand-forecasting", "x": 150, "y": 120, "alias": "forecast" },
    { "op": "place", "template": "inventory-optimization", "x": 400, "y": 120, "alias": "stock" },
    { "op": "startConnection", "node": "forecast" },
    { "op": "clickNode", "node": "stock" },
    { "op": "select", "node": "stock" },
    { "op": "edit", "edit": { "field": "parameter", "key": "serviceLevel", "value": "0.99" } },
    { "op": "pointerDown", "node": "stock", "x": 360, "y": 100 },
    { "op": "pointerMove", "x": 460, "y": 300 },
    { "op": "pointerUp" },
    { "op": "delete", "node": "forecast" }
]"#;

#[test]
fn test_replay_scenario_script() {
    let commands = Replay::parse_script(SCENARIO_SCRIPT).expect("script should parse");
    assert_eq!(commands.len(), 10);

    let mut editor = CanvasEditor::new();
    let mut replay = Replay::new();
    let outcomes = replay.run(&mut editor, commands).expect("replay should succeed");
    assert_eq!(outcomes.len(), 10);

    let stock = replay.alias("stock").unwrap();
    assert!(replay.alias("forecast").is_none(), "deleted aliases are unbound");

    assert!(matches!(outcomes[3], CommandOutcome::Click(ClickOutcome::Connected { .. })));
    assert_eq!(outcomes[5], CommandOutcome::Edited { changed: true });
    assert_eq!(outcomes[7], CommandOutcome::Moved(Some(Point::new(450.0, 295.0))));
    assert!(matches!(
        outcomes[9],
        CommandOutcome::Deleted { connections: 1, .. }
    ));

    assert_eq!(editor.nodes().len(), 1);
    assert!(editor.edges().is_empty());
    let node = editor.node(stock).unwrap();
    assert_eq!(node.config.parameters["serviceLevel"], "0.99");
    assert_eq!(node.position, Point::new(450.0, 295.0));
}

#[test]
fn test_replay_drop_without_template() {
    let script = r#"[{ "op": "drop", "x": 10, "y": 10, "alias": "ghost" }]"#;
    let commands = Replay::parse_script(script).unwrap();
    let mut editor = CanvasEditor::new();
    let mut replay = Replay::new();
    let outcomes = replay.run(&mut editor, commands).unwrap();

    assert_eq!(outcomes, vec![CommandOutcome::Drop(DropOutcome::NoTemplateInFlight)]);
    assert!(replay.alias("ghost").is_none());
}

#[test]
fn test_replay_self_loop_outcome() {
    let script = r#"[
        { "op": "place", "template": "sap-erp", "x": 100, "y": 100, "alias": "erp" },
        { "op": "startConnection", "node": "erp" },
        { "op": "clickNode", "node": "erp" }
    ]"#;
    let mut editor = CanvasEditor::new();
    let outcomes = Replay::new()
        .run(&mut editor, Replay::parse_script(script).unwrap())
        .unwrap();
    assert_eq!(
        outcomes[2],
        CommandOutcome::Click(ClickOutcome::Rejected {
            reason: ConnectRejection::SelfLoop
        })
    );
}

#[test]
fn test_replay_unknown_alias_fails() {
    let script = r#"[{ "op": "clickNode", "node": "nobody" }]"#;
    let mut editor = CanvasEditor::new();
    let err = Replay::new()
        .run(&mut editor, Replay::parse_script(script).unwrap())
        .unwrap_err();
    match err {
        ReplayError::UnknownAlias { step, alias } => {
            assert_eq!(step, 0);
            assert_eq!(alias, "nobody");
        }
        other => panic!("Expected UnknownAlias, got {:?}", other),
    }
}

#[test]
fn test_replay_duplicate_alias_fails() {
    let script = r#"[
        { "op": "place", "template": "sap-erp", "x": 100, "y": 100, "alias": "erp" },
        { "op": "place", "template": "sap-erp", "x": 300, "y": 100, "alias": "erp" }
    ]"#;
    let mut editor = CanvasEditor::new();
    let err = Replay::new()
        .run(&mut editor, Replay::parse_script(script).unwrap())
        .unwrap_err();
    assert!(matches!(err, ReplayError::DuplicateAlias { step: 1, .. }));
    // The failing step left the template in flight but placed nothing.
    assert_eq!(editor.nodes().len(), 1);
}

#[test]
fn test_replay_unknown_template_fails() {
    let script = r#"[{ "op": "place", "template": "warp-drive", "x": 1, "y": 1 }]"#;
    let mut editor = CanvasEditor::new();
    let err = Replay::new()
        .run(&mut editor, Replay::parse_script(script).unwrap())
        .unwrap_err();
    match err {
        ReplayError::Editor { step, source } => {
            assert_eq!(step, 0);
            assert_eq!(source, EditorError::TemplateNotFound("warp-drive".to_string()));
        }
        other => panic!("Expected Editor error, got {:?}", other),
    }
}

#[test]
fn test_replay_rejects_malformed_script() {
    assert!(matches!(
        Replay::parse_script(r#"[{ "op": "teleport" }]"#),
        Err(ReplayError::Parse(_))
    ));
}

#[test]
fn test_command_outcomes_serialize() {
    let outcome = CommandOutcome::Click(ClickOutcome::Rejected {
        reason: ConnectRejection::SelfLoop,
    });
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["kind"], "click");
    assert_eq!(value["result"]["outcome"], "rejected");
    assert_eq!(value["result"]["reason"], "selfLoop");
}

#[test]
fn test_bundled_scenario_with_bundled_config() {
    let config = EditorConfig::from_toml_str(include_str!("../data/editor.toml")).unwrap();
    let commands = Replay::parse_script(include_str!("../data/scenario.json")).unwrap();

    let mut editor = CanvasEditor::builder().with_config(config).build().unwrap();
    let mut replay = Replay::new();
    replay.run(&mut editor, commands).unwrap();

    assert_eq!(editor.nodes().len(), 4);
    assert_eq!(editor.edges().len(), 3);
    assert!(!editor.graph().has_cycle());
    assert_eq!(editor.selection(), None);

    let forecast = editor.node(replay.alias("forecast").unwrap()).unwrap();
    assert_eq!(forecast.config.parameters["horizonWeeks"], "26");
    let agent = editor.node(replay.alias("agent").unwrap()).unwrap();
    assert_eq!(agent.position, Point::new(810.0, 315.0));
}

#[test]
fn test_replay_edit_without_target_fails() {
    let script = r#"[
        { "op": "place", "template": "sap-erp", "x": 100, "y": 100, "alias": "erp" },
        { "op": "edit", "edit": { "field": "name", "value": "Orders" } }
    ]"#;
    let mut editor = CanvasEditor::new();
    let err = Replay::new()
        .run(&mut editor, Replay::parse_script(script).unwrap())
        .unwrap_err();
    assert!(matches!(err, ReplayError::NoSelection { step: 1 }));
    assert!(err.to_string().starts_with("Step 1"));
    assert_eq!(editor.nodes()[0].config.name, "SAP ERP");
}
