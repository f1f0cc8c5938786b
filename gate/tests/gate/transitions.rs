use gate::{GateError, Location, Snapshot};
use serde_json::json;

use crate::helpers::{AppState, redirect_gate};

const AUTHORIZED: Snapshot = Snapshot {
    authorized: true,
    authenticating: false,
};
const AUTHENTICATING: Snapshot = Snapshot {
    authorized: false,
    authenticating: true,
};
const LOGGED_OUT: Snapshot = Snapshot {
    authorized: false,
    authenticating: false,
};

#[test]
fn losing_access_without_redirect_back() -> anyhow::Result<()> {
    let (gate, recorder) = redirect_gate(false);
    let location = Location::new("/dashboard", "?tab=2");

    let next = gate.derive(&AppState::user(json!({})));
    assert!(gate.on_update(AUTHORIZED, &next, Some(&location))?);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/login");
    assert!(calls[0].query.is_empty());

    Ok(())
}

#[test]
fn authentication_in_flight_is_never_interrupted() -> anyhow::Result<()> {
    let (gate, recorder) = redirect_gate(true);
    let location = Location::parse("/reports");
    let next = gate.derive(&AppState::authenticating(json!(null)));

    for prev in [AUTHORIZED, AUTHENTICATING, LOGGED_OUT] {
        assert!(!gate.on_update(prev, &next, Some(&location))?);
    }
    assert!(recorder.calls().is_empty());

    Ok(())
}

#[test]
fn failed_login_redirects() -> anyhow::Result<()> {
    let (gate, recorder) = redirect_gate(true);
    let location = Location::parse("/reports?range=week");

    let next = gate.derive(&AppState::user(json!("")));
    assert!(gate.on_update(AUTHENTICATING, &next, Some(&location))?);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query["redirect"], "/reports?range=week");

    Ok(())
}

#[test]
fn unchanged_or_improving_access_never_redirects() -> anyhow::Result<()> {
    let (gate, recorder) = redirect_gate(true);
    let location = Location::parse("/reports");

    let still_out = gate.derive(&AppState::user(json!(null)));
    assert!(!gate.on_update(LOGGED_OUT, &still_out, Some(&location))?);

    let logged_in = gate.derive(&AppState::user(json!({"id": 2})));
    assert!(!gate.on_update(LOGGED_OUT, &logged_in, Some(&location))?);
    assert!(!gate.on_update(AUTHENTICATING, &logged_in, Some(&location))?);
    assert!(!gate.on_update(AUTHORIZED, &logged_in, Some(&location))?);

    assert!(recorder.calls().is_empty());

    Ok(())
}

#[test]
fn redirect_path_follows_state() -> anyhow::Result<()> {
    let (gate, recorder) = redirect_gate(true);
    let location = Location::parse("/settings");

    let state = AppState {
        tenant: Some("acme".into()),
        ..AppState::user(json!(null))
    };
    let next = gate.derive(&state);
    assert_eq!(next.failure_redirect_path, "/acme/login");
    assert!(gate.on_update(AUTHORIZED, &next, Some(&location))?);
    assert_eq!(recorder.calls()[0].path, "/acme/login");

    Ok(())
}

#[test]
fn redirect_without_location_is_an_error() {
    let (gate, recorder) = redirect_gate(true);
    let next = gate.derive(&AppState::user(json!(null)));

    let err = gate.on_update(AUTHORIZED, &next, None).unwrap_err();
    assert!(matches!(err, GateError::MissingLocation { ref wrapper }
        if wrapper == "UserIsAuthenticated"));
    assert!(recorder.calls().is_empty());
}

#[test]
fn mount_redirects_before_first_render() -> anyhow::Result<()> {
    let (gate, recorder) = redirect_gate(true);
    let location = Location::parse("/private");

    let props = gate.derive(&AppState::user(json!([])));
    assert!(gate.on_mount(&props, Some(&location))?);
    assert_eq!(recorder.calls().len(), 1);
    assert_eq!(recorder.calls()[0].query["redirect"], "/private");

    Ok(())
}
