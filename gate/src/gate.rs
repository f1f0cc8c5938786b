use std::collections::BTreeMap;

use crate::config::{GateConfig, GateMode};
use crate::error::GateError;
use crate::location::Location;
use crate::policy::AuthPolicy;
use crate::redirect::{Navigate, RedirectTarget};

/// Values derived from the store for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct GateProps<D> {
    pub auth_data: D,
    pub is_authenticating: bool,
    pub failure_redirect_path: String,
}

/// The part of a cycle's props the transition check compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub authorized: bool,
    pub authenticating: bool,
}

/// What to show for the current props.
#[derive(Debug, PartialEq)]
pub enum Render<'a, V, D> {
    /// The protected view, with the auth data to hand it.
    Protected(&'a D),
    /// Authentication is in flight. `None` means an empty placeholder.
    Loading(Option<&'a V>),
    /// Not authorized. `None` means an empty placeholder, which in
    /// redirect mode is only on screen until the navigation lands.
    Failure(Option<&'a V>),
}

pub struct AuthGate<P, V> {
    config: GateConfig<P, V>,
}

impl<P: AuthPolicy, V> AuthGate<P, V> {
    pub fn new(config: GateConfig<P, V>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig<P, V> {
        &self.config
    }

    pub fn is_authorized(&self, auth_data: &P::Data) -> bool {
        self.config.policy().is_authorized(auth_data)
    }

    pub fn compute_redirect_path(&self, state: &P::State) -> String {
        self.config.policy().resolve_redirect_path(state)
    }

    pub fn build_redirect_query(
        &self,
        location: &Location,
    ) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        if self.config.allow_redirect_back() {
            query.insert(
                self.config.redirect_query_param().to_string(),
                location.to_string(),
            );
        }
        query
    }

    pub fn trigger_redirect(
        &self,
        location: &Location,
        navigator: &dyn Navigate,
        path: &str,
    ) {
        let target = RedirectTarget {
            path: path.to_string(),
            query: self.build_redirect_query(location),
        };
        tracing::info!(
            wrapper = %self.config.display_name(),
            from = %location,
            to = %target.path,
            "redirecting unauthorized visitor"
        );
        navigator.redirect(target);
    }

    /// Read this cycle's props out of the store state.
    pub fn derive(&self, state: &P::State) -> GateProps<P::Data> {
        let policy = self.config.policy();
        GateProps {
            auth_data: policy.resolve_auth_data(state, false),
            is_authenticating: policy.is_authenticating(state),
            failure_redirect_path: policy.resolve_redirect_path(state),
        }
    }

    pub fn snapshot(&self, props: &GateProps<P::Data>) -> Snapshot {
        Snapshot {
            authorized: self.is_authorized(&props.auth_data),
            authenticating: props.is_authenticating,
        }
    }

    /// Check run before the first render. Returns whether a redirect fired.
    pub fn on_mount(
        &self,
        props: &GateProps<P::Data>,
        location: Option<&Location>,
    ) -> Result<bool, GateError> {
        let GateMode::Redirect(navigator) = self.config.mode() else {
            return Ok(false);
        };
        if props.is_authenticating || self.is_authorized(&props.auth_data) {
            return Ok(false);
        }
        let location = self.require_location(location)?;
        self.trigger_redirect(
            location,
            navigator.as_ref(),
            &props.failure_redirect_path,
        );
        Ok(true)
    }

    /// Check run on every later cycle, given the previous cycle's snapshot.
    /// Returns whether a redirect fired.
    pub fn on_update(
        &self,
        prev: Snapshot,
        next: &GateProps<P::Data>,
        location: Option<&Location>,
    ) -> Result<bool, GateError> {
        let GateMode::Redirect(navigator) = self.config.mode() else {
            return Ok(false);
        };
        // Never interrupt authentication in flight.
        if next.is_authenticating {
            return Ok(false);
        }

        let will_be_authorized = self.is_authorized(&next.auth_data);
        let lost_access = prev.authorized && !will_be_authorized;
        let failed_login = prev.authenticating && !will_be_authorized;
        if !(lost_access || failed_login) {
            return Ok(false);
        }

        tracing::debug!(
            wrapper = %self.config.display_name(),
            lost_access,
            failed_login,
            "authorization lost"
        );
        let location = self.require_location(location)?;
        self.trigger_redirect(
            location,
            navigator.as_ref(),
            &next.failure_redirect_path,
        );
        Ok(true)
    }

    pub fn decide<'a>(
        &'a self,
        props: &'a GateProps<P::Data>,
    ) -> Render<'a, V, P::Data> {
        if self.is_authorized(&props.auth_data) {
            Render::Protected(&props.auth_data)
        } else if props.is_authenticating {
            Render::Loading(self.config.loading())
        } else {
            Render::Failure(self.config.failure())
        }
    }

    /// Route-entry hook, available in redirect mode only.
    pub fn route_guard(&self) -> Option<RouteGuard<'_, P, V>> {
        self.config.is_redirect().then_some(RouteGuard { gate: self })
    }

    fn require_location<'l>(
        &self,
        location: Option<&'l Location>,
    ) -> Result<&'l Location, GateError> {
        location.ok_or_else(|| GateError::MissingLocation {
            wrapper: self.config.display_name().to_string(),
        })
    }
}

/// Decides navigation before anything renders, e.g. from a router switch.
pub struct RouteGuard<'a, P, V> {
    gate: &'a AuthGate<P, V>,
}

impl<P: AuthPolicy, V> RouteGuard<'_, P, V> {
    /// Redirect through `replace` if the state does not authorize entering
    /// `location`. Returns whether a redirect fired.
    pub fn on_enter(
        &self,
        state: &P::State,
        location: &Location,
        replace: &dyn Navigate,
    ) -> bool {
        let policy = self.gate.config.policy();
        let auth_data = policy.resolve_auth_data(state, true);
        if self.gate.is_authorized(&auth_data) {
            return false;
        }
        let path = policy.resolve_redirect_path(state);
        self.gate.trigger_redirect(location, replace, &path);
        true
    }
}
