use gate::{
    AuthGate, GateConfig, Navigate, RedirectPath, RedirectTarget, Selectors,
};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub type JsonGate = AuthGate<Selectors<AppState, Value>, &'static str>;

/// Store state as the selectors see it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub user: Value,
    pub authenticating: bool,
    pub tenant: Option<String>,
}

impl AppState {
    pub fn user(user: Value) -> Self {
        Self {
            user,
            ..Default::default()
        }
    }

    pub fn authenticating(user: Value) -> Self {
        Self {
            user,
            authenticating: true,
            ..Default::default()
        }
    }
}

/// Navigator that remembers every redirect it is asked to perform.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<RedirectTarget>>>);

impl Recorder {
    pub fn calls(&self) -> Vec<RedirectTarget> {
        self.0.borrow().clone()
    }
}

impl Navigate for Recorder {
    fn redirect(&self, target: RedirectTarget) {
        self.0.borrow_mut().push(target);
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer())
        .try_init();
}

pub fn selectors() -> Selectors<AppState, Value> {
    Selectors::new(|s: &AppState, _| s.user.clone())
        .authenticating(|s| s.authenticating)
        .redirect_path(RedirectPath::computed(|s: &AppState| {
            match &s.tenant {
                Some(tenant) => format!("/{tenant}/login"),
                None => "/login".to_string(),
            }
        }))
}

pub fn redirect_gate(allow_redirect_back: bool) -> (JsonGate, Recorder) {
    init_tracing();
    let recorder = Recorder::default();
    let config = GateConfig::builder(selectors())
        .loading("loading")
        .allow_redirect_back(allow_redirect_back)
        .navigator(recorder.clone())
        .display_name("UserIsAuthenticated")
        .build()
        .expect("valid redirect config");
    (AuthGate::new(config), recorder)
}

/// A failure view wins over the navigator, which must stay unused.
pub fn display_gate() -> (JsonGate, Recorder) {
    init_tracing();
    let recorder = Recorder::default();
    let config = GateConfig::builder(selectors())
        .loading("loading")
        .failure("access denied")
        .navigator(recorder.clone())
        .display_name("VisibleOnlyAdmin")
        .build()
        .expect("valid display config");
    (AuthGate::new(config), recorder)
}
