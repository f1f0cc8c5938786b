//! Redirect targets and the navigation capability that carries them out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Where an unauthorized visitor is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedirectTarget {
    pub path: String,
    /// Empty unless redirect-back is enabled.
    pub query: BTreeMap<String, String>,
}

/// Performs a client-side navigation.
///
/// Redirects are fire-and-forget: the gate neither awaits nor verifies
/// them, and a failed navigation is not retried.
pub trait Navigate {
    fn redirect(&self, target: RedirectTarget);
}

impl<F> Navigate for F
where
    F: Fn(RedirectTarget),
{
    fn redirect(&self, target: RedirectTarget) {
        self(target)
    }
}

/// Failure redirect path, either fixed or computed from the store state.
pub enum RedirectPath<S> {
    Static(String),
    Computed(Rc<dyn Fn(&S) -> String>),
}

impl<S> RedirectPath<S> {
    pub fn computed(f: impl Fn(&S) -> String + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }

    pub fn resolve(&self, state: &S) -> String {
        match self {
            Self::Static(path) => path.clone(),
            Self::Computed(f) => f(state),
        }
    }
}

impl<S> Default for RedirectPath<S> {
    fn default() -> Self {
        Self::Static(crate::DEFAULT_REDIRECT_PATH.to_string())
    }
}

impl<S> Clone for RedirectPath<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(path) => Self::Static(path.clone()),
            Self::Computed(f) => Self::Computed(Rc::clone(f)),
        }
    }
}

impl<S> fmt::Debug for RedirectPath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(path) => f.debug_tuple("Static").field(path).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<S> From<&str> for RedirectPath<S> {
    fn from(path: &str) -> Self {
        Self::Static(path.to_string())
    }
}

impl<S> From<String> for RedirectPath<S> {
    fn from(path: String) -> Self {
        Self::Static(path)
    }
}
