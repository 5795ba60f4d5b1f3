//! Integrationstests fuer den Intent->Command->Handler-Fluss:
//! - Chart laden, Editieren, Undo/Redo
//! - Selektions-Toggle-Protokoll
//! - Panel- und Guide-Commands

use regex_diagram_editor::{
    EditorCommand, EditorController, EditorIntent, EditorState, InsertDirection, Node,
    SelectPayload,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Erstellt eine Sequenz aus drei Character-Blaettern A, B, C.
fn chart_a_b_c() -> Vec<Node> {
    vec![
        Node::character("a").with_id("A"),
        Node::character("b").with_id("B"),
        Node::character("c").with_id("C"),
    ]
}

fn load_chart(controller: &mut EditorController, state: &mut EditorState) {
    controller
        .handle_intent(
            state,
            EditorIntent::ChartOpened {
                id: "chart-1".to_string(),
                nodes: chart_a_b_c(),
                selected_ids: Vec::new(),
            },
        )
        .expect("ChartOpened sollte ohne Fehler durchlaufen");
}

// ─── Chart laden ─────────────────────────────────────────────────────────────

#[test]
fn test_chart_opened_replaces_state_without_touching_history() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();

    load_chart(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            EditorIntent::InsertRequested {
                direction: InsertDirection::Next,
            },
        )
        .expect("InsertRequested darf nicht fehlschlagen");
    assert_eq!(state.history.undo_depth(), 1);

    // Chart-Wechsel laesst beide Stacks unveraendert.
    controller
        .handle_intent(
            &mut state,
            EditorIntent::ChartOpened {
                id: "chart-2".to_string(),
                nodes: vec![Node::character("x").with_id("X")],
                selected_ids: vec!["X".to_string()],
            },
        )
        .expect("ChartOpened sollte ohne Fehler durchlaufen");

    assert_eq!(state.active_chart_id, "chart-2");
    assert_eq!(state.node_count(), 1);
    assert_eq!(state.selected_ids, vec!["X".to_string()]);
    assert_eq!(state.history.undo_depth(), 1);
    assert_eq!(state.history.redo_depth(), 0);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        EditorCommand::SetActiveChart { id, .. } => assert_eq!(id, "chart-2"),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

// ─── Undo/Redo ───────────────────────────────────────────────────────────────

#[test]
fn test_n_edits_und_n_undos_stellen_startzustand_wieder_her() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);

    let initial = state.nodes.as_ref().clone();

    for direction in [
        InsertDirection::Next,
        InsertDirection::Prev,
        InsertDirection::Next,
    ] {
        controller
            .handle_intent(&mut state, EditorIntent::InsertRequested { direction })
            .expect("InsertRequested darf nicht fehlschlagen");
    }
    assert_eq!(state.history.undo_depth(), 3);

    for _ in 0..3 {
        controller
            .handle_intent(&mut state, EditorIntent::UndoRequested)
            .expect("UndoRequested darf nicht fehlschlagen");
    }

    assert_eq!(state.nodes.as_ref(), &initial);
    assert!(!state.can_undo());
    assert_eq!(state.history.redo_depth(), 3);
}

#[test]
fn test_undo_dann_redo_liefert_strukturell_gleichen_baum() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);

    state.selected_ids = vec!["B".to_string()];
    controller
        .handle_intent(&mut state, EditorIntent::RemoveSelectedRequested)
        .expect("RemoveSelectedRequested darf nicht fehlschlagen");
    let after_remove = state.nodes.as_ref().clone();

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("UndoRequested darf nicht fehlschlagen");
    assert_eq!(state.nodes.as_ref(), &chart_a_b_c());

    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested)
        .expect("RedoRequested darf nicht fehlschlagen");
    assert_eq!(state.nodes.as_ref(), &after_remove);
}

#[test]
fn test_undo_und_redo_auf_leeren_stacks_sind_noops() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);
    let before = state.nodes.as_ref().clone();

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("UndoRequested auf leerem Stack muss robust sein");
    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested)
        .expect("RedoRequested auf leerem Stack muss robust sein");

    assert_eq!(state.nodes.as_ref(), &before);
    assert_eq!(state.history.undo_depth(), 0);
    assert_eq!(state.history.redo_depth(), 0);
}

#[test]
fn test_redo_eintrag_ueberlebt_frischen_edit() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);

    state.selected_ids = vec!["C".to_string()];
    controller
        .handle_intent(&mut state, EditorIntent::RemoveSelectedRequested)
        .expect("RemoveSelectedRequested darf nicht fehlschlagen");
    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("UndoRequested darf nicht fehlschlagen");
    assert!(state.can_redo());

    // Frischer Edit nach Undo: der Redo-Eintrag bleibt anwendbar.
    state.selected_ids = vec!["A".to_string()];
    controller
        .handle_intent(
            &mut state,
            EditorIntent::InsertRequested {
                direction: InsertDirection::Prev,
            },
        )
        .expect("InsertRequested darf nicht fehlschlagen");

    assert!(state.can_redo());
    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested)
        .expect("RedoRequested darf nicht fehlschlagen");
    // Redo stellt die Zwei-Node-Sequenz ohne C wieder her.
    assert_eq!(state.node_count(), 2);
    assert!(state.nodes.iter().all(|n| n.id != "C"));
}

#[test]
fn test_remove_dann_undo_stellt_baum_aber_nicht_selektion_wieder_her() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);

    state.selected_ids = vec!["B".to_string()];
    controller
        .handle_intent(&mut state, EditorIntent::RemoveSelectedRequested)
        .expect("RemoveSelectedRequested darf nicht fehlschlagen");
    assert!(state.selected_ids.is_empty(), "Remove muss Selektion leeren");
    assert_eq!(state.node_count(), 2);

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("UndoRequested darf nicht fehlschlagen");

    assert_eq!(state.nodes.as_ref(), &chart_a_b_c());
    // Undo restauriert nur den Baum; die geleerte Selektion bleibt leer.
    assert!(state.selected_ids.is_empty());
}

#[test]
fn test_identitaets_edit_erzeugt_trotzdem_history_eintrag() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);

    // Keine Selektion: Insert ist ein Identitaets-Edit.
    controller
        .handle_intent(
            &mut state,
            EditorIntent::InsertRequested {
                direction: InsertDirection::Next,
            },
        )
        .expect("InsertRequested darf nicht fehlschlagen");

    assert_eq!(state.nodes.as_ref(), &chart_a_b_c());
    assert_eq!(state.history.undo_depth(), 1);
}

// ─── Selektion ───────────────────────────────────────────────────────────────

#[test]
fn test_einzelklick_auf_exakt_selektierten_node_deselektiert() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);
    state.selected_ids = vec!["B".to_string()];

    controller
        .handle_intent(
            &mut state,
            EditorIntent::NodeClicked {
                selected: SelectPayload::from("B"),
            },
        )
        .expect("NodeClicked darf nicht fehlschlagen");

    assert!(state.selected_ids.is_empty());
}

#[test]
fn test_einzelklick_ersetzt_mehr_element_selektion_statt_zu_togglen() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);
    state.selected_ids = vec!["A".to_string(), "B".to_string()];

    // "B" ist zwar selektiert, aber nicht die exakte Ein-Element-Selektion.
    controller
        .handle_intent(
            &mut state,
            EditorIntent::NodeClicked {
                selected: SelectPayload::from("B"),
            },
        )
        .expect("NodeClicked darf nicht fehlschlagen");

    assert_eq!(state.selected_ids, vec!["B".to_string()]);
}

#[test]
fn test_sequenz_payload_ersetzt_selektion_ohne_toggle() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);
    state.selected_ids = vec!["B".to_string()];

    // Auch eine Ein-Element-Sequenz mit derselben ID toggelt nicht.
    controller
        .handle_intent(
            &mut state,
            EditorIntent::NodeClicked {
                selected: SelectPayload::from(vec!["B".to_string()]),
            },
        )
        .expect("NodeClicked darf nicht fehlschlagen");
    assert_eq!(state.selected_ids, vec!["B".to_string()]);

    controller
        .handle_intent(
            &mut state,
            EditorIntent::NodeClicked {
                selected: SelectPayload::from(vec!["A".to_string(), "C".to_string()]),
            },
        )
        .expect("NodeClicked darf nicht fehlschlagen");
    assert_eq!(state.selected_ids, vec!["A".to_string(), "C".to_string()]);
}

#[test]
fn test_selektion_aendert_keine_history() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            EditorIntent::NodeClicked {
                selected: SelectPayload::from("A"),
            },
        )
        .expect("NodeClicked darf nicht fehlschlagen");

    assert_eq!(state.selected_ids, vec!["A".to_string()]);
    assert_eq!(state.history.undo_depth(), 0);
    assert_eq!(state.history.redo_depth(), 0);
}

// ─── Panel & Guide ───────────────────────────────────────────────────────────

#[test]
fn test_panel_toggle_flippt_zustand_ohne_history() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    assert!(!state.editor_collapsed);

    controller
        .handle_intent(&mut state, EditorIntent::EditorPanelToggled)
        .expect("EditorPanelToggled darf nicht fehlschlagen");
    assert!(state.editor_collapsed);

    controller
        .handle_intent(&mut state, EditorIntent::EditorPanelToggled)
        .expect("EditorPanelToggled darf nicht fehlschlagen");
    assert!(!state.editor_collapsed);
    assert_eq!(state.history.undo_depth(), 0);
}

#[test]
fn test_guide_oeffnen_und_schliessen() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();

    controller
        .handle_intent(
            &mut state,
            EditorIntent::GuideOpened {
                title: "Erste Schritte".to_string(),
                content: "Klicke auf ein Blatt".to_string(),
            },
        )
        .expect("GuideOpened darf nicht fehlschlagen");
    assert!(state.guide.visible);
    assert_eq!(state.guide.title, "Erste Schritte");

    controller
        .handle_intent(&mut state, EditorIntent::GuideDismissed)
        .expect("GuideDismissed darf nicht fehlschlagen");
    assert!(!state.guide.visible);
}

// ─── Command-Log ─────────────────────────────────────────────────────────────

#[test]
fn test_jeder_intent_hinterlaesst_einen_log_eintrag() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    load_chart(&mut controller, &mut state);
    assert_eq!(state.command_log.len(), 1);

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("UndoRequested darf nicht fehlschlagen");
    assert_eq!(state.command_log.len(), 2);

    match state.command_log.entries().last() {
        Some(EditorCommand::Undo) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
