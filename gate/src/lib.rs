//! Authentication gating for protected views.
//!
//! A [`GateConfig`] pairs an [`AuthPolicy`] with presentation options. The
//! [`AuthGate`] built from it is consulted on every render cycle: it derives
//! [`GateProps`] from the application state, decides what to [`Render`], and
//! in redirect mode sends unauthorized visitors to the login path through an
//! explicit [`Navigate`] capability.
//!
//! ```rust
//! use gate::{AuthGate, GateConfig, Location, RedirectTarget, Render, Selectors};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct State {
//!     user: Option<String>,
//! }
//!
//! let redirects = Rc::new(RefCell::new(Vec::<RedirectTarget>::new()));
//! let sink = Rc::clone(&redirects);
//! let config = GateConfig::<_, ()>::builder(Selectors::new(
//!     |s: &State, _| s.user.clone(),
//! ))
//! .navigator(move |target: RedirectTarget| sink.borrow_mut().push(target))
//! .build()
//! .unwrap();
//! let gate = AuthGate::new(config);
//!
//! let props = gate.derive(&State { user: None });
//! let location = Location::new("/dashboard", "?tab=2");
//! assert!(gate.on_mount(&props, Some(&location)).unwrap());
//! assert_eq!(redirects.borrow()[0].query["redirect"], "/dashboard?tab=2");
//! assert!(matches!(gate.decide(&props), Render::Failure(None)));
//! ```

mod config;
mod error;
mod gate;
mod location;
mod policy;
mod redirect;

pub use config::{GateConfig, GateConfigBuilder, GateMode};
pub use error::{ConfigError, GateError};
pub use gate::{AuthGate, GateProps, Render, RouteGuard, Snapshot};
pub use location::Location;
pub use policy::{AuthPolicy, IsEmpty, Selectors, non_empty};
pub use redirect::{Navigate, RedirectPath, RedirectTarget};

pub const DEFAULT_REDIRECT_PATH: &str = "/login";
pub const DEFAULT_QUERY_PARAM: &str = "redirect";
pub const DEFAULT_DISPLAY_NAME: &str = "AuthWrapper";
