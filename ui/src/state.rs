use gate::{IsEmpty, RedirectTarget};
use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub is_admin: bool,
}

impl IsEmpty for User {
    fn is_empty_value(&self) -> bool {
        self.username.is_empty()
    }
}

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    LoggedOut,
    Authenticating,
    LoggedIn(User),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
    /// Redirect requested through the store, waiting to be navigated to.
    pub pending_redirect: Option<RedirectTarget>,
}

impl State {
    pub fn user(&self) -> Option<User> {
        match &self.auth_state {
            AuthState::LoggedIn(user) => Some(user.clone()),
            AuthState::LoggedOut | AuthState::Authenticating => None,
        }
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self.auth_state, AuthState::Authenticating)
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
