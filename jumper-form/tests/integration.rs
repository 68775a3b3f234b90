//! Integration tests for jumper-form

use jumper_form::{
    FieldDescriptor, FormBackend, FormDefinition, FormOutcome, FormSession, Key, RecordingCanvas,
    ScriptedKeys, TestBackend, TestBackendError,
};
use pretty_assertions::assert_eq;
use regex::Regex;

fn entry_form() -> FormDefinition {
    FormDefinition::new(vec![
        FieldDescriptor::text("Name").with_min_length(1).with_value("web"),
        FieldDescriptor::text("Username")
            .with_pattern(Regex::new("^[a-z][a-z0-9_-]{0,31}$").unwrap())
            .with_min_length(1)
            .with_value("deploy"),
        FieldDescriptor::text("IP Address")
            .with_pattern(Regex::new(r"^\.?(?:[A-Za-z0-9-]+\.?)*$").unwrap())
            .with_min_length(1)
            .with_value("10.0.0.1"),
        FieldDescriptor::number("SSH Port")
            .with_value("22")
            .with_max_length(5)
            .with_min_length(1),
        FieldDescriptor::selection(" Save ").gate(),
        FieldDescriptor::selection(" Delete "),
    ])
    .unwrap()
    .cancellable()
}

#[test]
fn round_trip_returns_initial_values() {
    let backend = TestBackend::new().with_keys([
        Key::Down,
        Key::Down,
        Key::Down,
        Key::Down,
        Key::Enter,
    ]);
    let submission = backend
        .show(entry_form())
        .unwrap()
        .into_submission()
        .unwrap();

    assert!(submission.is_action("Save"));
    assert_eq!(submission.value("Name"), Some("web"));
    assert_eq!(submission.value("Username"), Some("deploy"));
    assert_eq!(submission.value("IP Address"), Some("10.0.0.1"));
    assert_eq!(submission.value("SSH Port"), Some("22"));
    assert_eq!(submission.values.len(), 4);
}

#[test]
fn cancel_is_distinct_from_confirm_even_after_edits() {
    let backend = TestBackend::new()
        .with_typed("-prod")
        .with_key(Key::Escape);
    let outcome = backend.show(entry_form()).unwrap();
    assert_eq!(outcome, FormOutcome::Cancelled);
    assert!(outcome.submission().is_none());
}

#[test]
fn escape_is_ignored_on_forms_that_cannot_cancel() {
    let definition = FormDefinition::new(vec![
        FieldDescriptor::text("Set an admin password").masked(),
        FieldDescriptor::selection(" Continue ").gate(),
        FieldDescriptor::selection(" Back "),
    ])
    .unwrap();
    let backend = TestBackend::new()
        .with_keys([Key::Escape, Key::Tab, Key::Right, Key::Enter]);
    let submission = backend.show(definition).unwrap().into_submission().unwrap();
    assert_eq!(submission.action, " Back ");
}

#[test]
fn delete_is_reachable_while_save_is_gated() {
    let backend = TestBackend::new()
        .with_keys([Key::Backspace, Key::Backspace, Key::Backspace])
        .with_keys([Key::Down, Key::Down, Key::Down, Key::Down, Key::Enter]);
    let submission = backend
        .show(entry_form())
        .unwrap()
        .into_submission()
        .unwrap();

    assert_eq!(submission.action, " Delete ");
    assert_eq!(submission.value("Name"), Some(""));
}

#[test]
fn values_stay_valid_after_every_key() {
    let keys: Vec<Key> = [Key::Down]
        .into_iter()
        .chain(Key::typed("x!Y.y"))
        .chain([Key::Down])
        .chain(Key::typed("a..b"))
        .chain([Key::Down])
        .chain(Key::typed("123456789x"))
        .chain([Key::Up, Key::Backspace, Key::Backspace])
        .collect();

    let definition = entry_form();
    let patterns: Vec<(String, Regex)> = definition
        .fields()
        .iter()
        .filter_map(|f| f.pattern().map(|p| (f.name().to_string(), p.clone())))
        .collect();

    let mut session = FormSession::new(definition);
    let mut canvas = RecordingCanvas::for_layout(session.layout());
    session.paint(&mut canvas).unwrap();

    for key in keys {
        let gate_was_open = session.state().all_required_satisfied();
        assert!(session.handle_key(key, &mut canvas).unwrap().is_none());
        let state = session.state();

        let port = state.value_of("SSH Port").unwrap();
        assert!(port.chars().all(|c| c.is_ascii_digit()));
        assert!(port.len() <= 5);
        for (name, pattern) in &patterns {
            let value = state.value_of(name).unwrap();
            assert!(value.is_empty() || pattern.is_match(value), "{name} = {value:?}");
        }
        if !gate_was_open {
            assert_ne!(Some(session.focus()), state.gate_index());
        }
    }

    assert_eq!(session.state().value_of("IP Address"), Some("10.0.0.1a"));
    assert_eq!(session.state().value_of("SSH Port"), Some("22123"));
    assert_eq!(session.state().value_of("Username"), Some("deployxy"));
}

#[test]
fn gate_never_focused_while_closed() {
    let definition = FormDefinition::new(vec![
        FieldDescriptor::text("Name").with_min_length(1),
        FieldDescriptor::selection("Save").gate(),
        FieldDescriptor::selection("Delete"),
    ])
    .unwrap();
    let mut session = FormSession::new(definition);
    let mut canvas = RecordingCanvas::for_layout(session.layout());
    session.paint(&mut canvas).unwrap();

    for key in [
        Key::Down,
        Key::Left,
        Key::Up,
        Key::Tab,
        Key::Tab,
        Key::Tab,
        Key::Right,
    ] {
        session.handle_key(key, &mut canvas).unwrap();
        assert_ne!(session.focus(), 1, "after {key:?}");
    }
}

#[test]
fn sessions_do_not_share_state() {
    let backend = TestBackend::new()
        .with_typed("-old")
        .with_key(Key::Escape)
        .with_keys([Key::Down, Key::Down, Key::Down, Key::Down, Key::Enter]);

    assert!(backend.show(entry_form()).unwrap().is_cancelled());
    let submission = backend
        .show(entry_form())
        .unwrap()
        .into_submission()
        .unwrap();
    assert_eq!(submission.value("Name"), Some("web"));
    assert_eq!(backend.remaining_keys(), 0);
}

#[test]
fn running_out_of_keys_is_an_error() {
    let backend = TestBackend::new().with_typed("abc");
    let err = backend.show(entry_form()).unwrap_err();
    assert!(matches!(err, TestBackendError::ScriptExhausted));
    assert!(backend.last_canvas().is_some());
}

#[test]
fn run_hides_cursor_when_done() {
    let session = FormSession::new(entry_form());
    let mut canvas = RecordingCanvas::for_layout(session.layout());
    let mut keys = ScriptedKeys::new([Key::Escape]);
    let outcome = session.run(&mut keys, &mut canvas).unwrap();
    assert!(outcome.is_cancelled());
    assert_eq!(canvas.cursor(), None);
}
