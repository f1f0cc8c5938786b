//! The gates the demo routes sit behind.

use gate::{ConfigError, GateConfig, RedirectPath, RedirectTarget, Selectors};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::navigate::{HistoryNavigator, StoreRedirect};
use crate::state::{State, User};
use crate::wrapper::{AuthWrapper, GateView, PassThrough};

pub type UserPolicy = Selectors<State, Option<User>>;

fn user_selectors() -> UserPolicy {
    Selectors::new(|state: &State, _| state.user())
        .authenticating(State::is_authenticating)
}

fn is_admin(user: &Option<User>) -> bool {
    user.as_ref().is_some_and(|user| user.is_admin)
}

fn loading_view() -> GateView {
    Callback::from(|_: PassThrough| {
        html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
            </div>
        }
    })
}

/// Any signed in user; everyone else is sent to the login page and brought
/// back afterwards.
pub fn user_is_authenticated() -> Result<AuthWrapper<UserPolicy>, ConfigError>
{
    let config = GateConfig::builder(user_selectors())
        .loading(loading_view())
        .navigator(HistoryNavigator::browser())
        .display_name("UserIsAuthenticated")
        .build()?;
    Ok(AuthWrapper::new(config))
}

/// Admins only. Redirects go through the store: signed in non-admins land
/// on the home page, everyone else on the login page.
pub fn user_is_admin(
    dispatch: Dispatch<State>,
) -> Result<AuthWrapper<UserPolicy>, ConfigError> {
    let policy = user_selectors().predicate(is_admin).redirect_path(
        RedirectPath::computed(|state: &State| {
            if state.user().is_some() { "/" } else { "/login" }.to_string()
        }),
    );
    let redirect = StoreRedirect::new(
        dispatch,
        |state: &mut State, target: RedirectTarget| {
            state.pending_redirect = Some(target);
        },
    );
    let config = GateConfig::builder(policy)
        .loading(loading_view())
        .navigator(redirect)
        .display_name("UserIsAdmin")
        .build()?;
    Ok(AuthWrapper::new(config))
}

/// Admins only, without leaving the page: others see a notice.
pub fn visible_only_admin() -> Result<AuthWrapper<UserPolicy>, ConfigError> {
    let failure = Callback::from(|pass: PassThrough| {
        html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {"Only administrators can change these settings."}
                </p>
                <a href={pass.failure_redirect_path} class="text-sm underline">
                    {"Sign in with another account"}
                </a>
            </div>
        }
    });
    let config = GateConfig::builder(user_selectors().predicate(is_admin))
        .loading(loading_view())
        .failure(failure)
        .display_name("VisibleOnlyAdmin")
        .build()?;
    Ok(AuthWrapper::new(config))
}
