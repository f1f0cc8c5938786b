use gate::{Location, Render, Snapshot};
use serde_json::{Value, json};

use crate::helpers::{AppState, display_gate, redirect_gate};

fn present_values() -> Vec<Value> {
    vec![
        json!({"id": 1}),
        json!(["admin"]),
        json!("token"),
        json!(0),
        json!(false),
        json!(-1.5),
    ]
}

fn empty_values() -> Vec<Value> {
    vec![json!(null), json!({}), json!([]), json!("")]
}

#[test]
fn authorized_and_settled_always_renders_protected() -> anyhow::Result<()> {
    let (gate, recorder) = redirect_gate(true);
    let location = Location::parse("/home");

    for value in present_values() {
        let props = gate.derive(&AppState::user(value.clone()));
        assert_eq!(gate.decide(&props), Render::Protected(&value));
        assert!(!gate.on_mount(&props, Some(&location))?);
        for prev in [Snapshot::default(), gate.snapshot(&props)] {
            assert!(!gate.on_update(prev, &props, Some(&location))?);
        }
    }
    assert!(recorder.calls().is_empty());

    Ok(())
}

#[test]
fn authenticating_renders_loading_when_not_yet_authorized() {
    let (redirecting, recorder) = redirect_gate(true);
    let (displaying, _) = display_gate();

    for value in empty_values() {
        let state = AppState::authenticating(value);
        for gate in [&redirecting, &displaying] {
            let props = gate.derive(&state);
            assert!(props.is_authenticating);
            assert_eq!(gate.decide(&props), Render::Loading(Some(&"loading")));
        }
    }
    assert!(recorder.calls().is_empty());
}

#[test]
fn empty_auth_data_is_unauthorized() {
    let (gate, _) = display_gate();
    for value in empty_values() {
        assert!(!gate.is_authorized(&value), "{value} should be empty");
    }
    for value in present_values() {
        assert!(gate.is_authorized(&value), "{value} should be present");
    }
}
