use gate::{Location, Render, Snapshot};
use serde_json::json;

use crate::helpers::{AppState, display_gate};

#[test]
fn unauthorized_visitors_see_the_failure_view() -> anyhow::Result<()> {
    let (gate, recorder) = display_gate();
    let location = Location::parse("/admin");
    assert!(!gate.config().is_redirect());

    let props = gate.derive(&AppState::user(json!(null)));
    assert_eq!(gate.decide(&props), Render::Failure(Some(&"access denied")));
    assert!(!gate.on_mount(&props, Some(&location))?);

    let was_authorized = Snapshot {
        authorized: true,
        authenticating: false,
    };
    assert!(!gate.on_update(was_authorized, &props, Some(&location))?);
    assert!(!gate.on_update(Snapshot::default(), &props, None)?);

    assert!(recorder.calls().is_empty());

    Ok(())
}

#[test]
fn loading_then_protected() {
    let (gate, _) = display_gate();

    let checking = gate.derive(&AppState::authenticating(json!(null)));
    assert_eq!(gate.decide(&checking), Render::Loading(Some(&"loading")));

    let signed_in = gate.derive(&AppState::user(json!({"role": "admin"})));
    assert_eq!(
        gate.decide(&signed_in),
        Render::Protected(&json!({"role": "admin"}))
    );
}
