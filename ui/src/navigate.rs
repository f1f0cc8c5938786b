//! Ways for a gate to leave the page.

use gate::{Navigate, RedirectTarget};
use std::rc::Rc;
use yew_router::history::{AnyHistory, BrowserHistory, History};
use yewdux::prelude::*;

/// Replaces the current history entry, so the protected page is not left
/// behind in the back stack.
#[derive(Clone, PartialEq)]
pub struct HistoryNavigator {
    history: AnyHistory,
}

impl HistoryNavigator {
    pub fn new(history: impl Into<AnyHistory>) -> Self {
        Self {
            history: history.into(),
        }
    }

    /// Navigator over the browser history shared with `BrowserRouter`.
    pub fn browser() -> Self {
        Self::new(BrowserHistory::new())
    }
}

impl Navigate for HistoryNavigator {
    fn redirect(&self, target: RedirectTarget) {
        if target.query.is_empty() {
            self.history.replace(target.path);
            return;
        }
        if let Err(e) =
            self.history.replace_with_query(&target.path, &target.query)
        {
            tracing::warn!(path = %target.path, "redirect failed: {e}");
        }
    }
}

/// Redirects by dispatching an action into the store, leaving the actual
/// navigation to whoever observes it.
pub struct StoreRedirect<S: Store> {
    dispatch: Dispatch<S>,
    action: Rc<dyn Fn(&mut S, RedirectTarget)>,
}

impl<S: Store> StoreRedirect<S> {
    pub fn new(
        dispatch: Dispatch<S>,
        action: impl Fn(&mut S, RedirectTarget) + 'static,
    ) -> Self {
        Self {
            dispatch,
            action: Rc::new(action),
        }
    }
}

impl<S: Store + Clone> Navigate for StoreRedirect<S> {
    fn redirect(&self, target: RedirectTarget) {
        let action = Rc::clone(&self.action);
        self.dispatch.reduce_mut(move |state| action(state, target));
    }
}
