use gate::{
    AuthGate, GateConfig, Location, RedirectPath, RedirectTarget, Selectors,
};
use serde_json::{Value, json};
use std::cell::Cell;
use std::rc::Rc;

use crate::helpers::{AppState, Recorder, display_gate, redirect_gate};

#[test]
fn entering_uses_the_supplied_replace() {
    let (gate, configured) = redirect_gate(true);
    let replace = Recorder::default();
    let guard = gate.route_guard().expect("redirect mode has a guard");

    let location = Location::new("/billing", "?invoice=9");
    assert!(guard.on_enter(&AppState::user(json!(null)), &location, &replace));

    let calls = replace.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/login");
    assert_eq!(calls[0].query["redirect"], "/billing?invoice=9");
    assert!(configured.calls().is_empty());
}

#[test]
fn entering_while_authorized_does_nothing() {
    let (gate, _) = redirect_gate(true);
    let replace = Recorder::default();
    let guard = gate.route_guard().expect("redirect mode has a guard");

    let state = AppState::user(json!({"id": 3}));
    assert!(!guard.on_enter(&state, &Location::parse("/billing"), &replace));
    assert!(replace.calls().is_empty());
}

#[test]
fn entering_selects_with_initial_load() {
    let initial_loads = Rc::new(Cell::new(0));
    let counter = Rc::clone(&initial_loads);
    let policy = Selectors::new(move |s: &AppState, initial_load| {
        if initial_load {
            counter.set(counter.get() + 1);
        }
        s.user.clone()
    })
    .redirect_path(RedirectPath::computed(|s: &AppState| {
        s.tenant.clone().unwrap_or_default() + "/signin"
    }));
    let config = GateConfig::<_, ()>::builder(policy)
        .navigator(|_: RedirectTarget| {})
        .build()
        .expect("valid config");
    let gate = AuthGate::new(config);

    // The render cycle never reports an initial load.
    let _ = gate.derive(&AppState::default());
    assert_eq!(initial_loads.get(), 0);

    let replace = Recorder::default();
    let state = AppState {
        tenant: Some("/acme".into()),
        ..AppState::user(Value::Null)
    };
    let guard = gate.route_guard().expect("redirect mode has a guard");
    assert!(guard.on_enter(&state, &Location::parse("/"), &replace));
    assert_eq!(initial_loads.get(), 1);
    assert_eq!(replace.calls()[0].path, "/acme/signin");
}

#[test]
fn display_mode_has_no_route_guard() {
    let (gate, _) = display_gate();
    assert!(gate.route_guard().is_none());
}
