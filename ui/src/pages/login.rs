use gate::{Navigate, RedirectTarget};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::navigate::HistoryNavigator;
use crate::state::{AuthState, State, User};

/// Query the gates attach when they send a visitor here.
#[derive(Deserialize, Default)]
struct LoginQuery {
    redirect: Option<String>,
}

/// Only same-site paths are followed back after sign in; anything else,
/// including protocol-relative `//host` values, returns to the home page.
fn return_path(redirect: Option<String>) -> String {
    match redirect {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\") =>
        {
            path
        }
        _ => "/".to_string(),
    }
}

#[function_component]
pub fn LoginPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let return_to = use_location()
        .and_then(|location| location.query::<LoginQuery>().ok())
        .and_then(|query| query.redirect);
    let return_to = return_path(return_to);

    let sign_in = |username: &'static str, is_admin: bool| {
        let dispatch = dispatch.clone();
        let return_to = return_to.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            let return_to = return_to.clone();
            dispatch.reduce_mut(|state| {
                state.auth_state = AuthState::Authenticating
            });

            yew::platform::spawn_local(async move {
                // Stand-in for a round trip to the backend
                TimeoutFuture::new(500).await;
                dispatch.reduce_mut(|state| {
                    state.auth_state = AuthState::LoggedIn(User {
                        username: username.to_string(),
                        is_admin,
                    })
                });
                tracing::debug!(%return_to, "signed in");
                HistoryNavigator::browser().redirect(RedirectTarget {
                    path: return_to,
                    query: Default::default(),
                });
            });
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">{"Sign in to continue"}</h1>
                if state.is_authenticating() {
                    <p class="text-neutral-600 dark:text-neutral-400">{"Signing in..."}</p>
                } else {
                    <div class="space-x-2">
                        <button onclick={sign_in("alice", false)}>{"Sign in as alice"}</button>
                        <button onclick={sign_in("admin", true)}>{"Sign in as admin"}</button>
                    </div>
                }
            </div>
        </div>
    }
}
