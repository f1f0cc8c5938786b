//! Yew bindings for [`gate`]: wrap protected components so they only render
//! for authorized visitors, reading auth state from a yewdux store.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

mod guarded;
mod logs;
mod navigate;
mod pages;
mod route;
mod state;
mod wrapper;
mod wrappers;

pub use guarded::{Guarded, GuardedProps, use_gate_location};
pub use navigate::{HistoryNavigator, StoreRedirect};
pub use route::{enter_route, use_route_guard};
pub use wrapper::{
    AuthWrapper, GateView, PassThrough, WithAuthData, WrapperConfig,
};

use gate::Navigate;
use state::State;

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <StoreRedirects />
                <Header />
                <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/settings")]
    Settings,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <p>{"Hello World"}</p> },
        Route::Login => html! { <pages::LoginPage /> },
        Route::Dashboard => html! { <pages::DashboardRoute /> },
        Route::Settings => html! { <pages::SettingsRoute /> },
        Route::Admin => html! { <pages::AdminRoute /> },
        Route::NotFound => html! {
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                <p class="text-gray-600 dark:text-gray-300">{"Page not found"}</p>
            </div>
        },
    }
}

/// Carries out redirects that gates dispatched into the store.
#[function_component]
fn StoreRedirects() -> Html {
    let (state, dispatch) = use_store::<State>();

    use_effect_with(state.pending_redirect.clone(), move |pending| {
        if let Some(target) = pending.clone() {
            HistoryNavigator::browser().redirect(target);
            dispatch.reduce_mut(|state| state.pending_redirect = None);
        }
    });

    html! {}
}

#[function_component]
fn Header() -> Html {
    let (state, dispatch) = use_store::<State>();
    let logout = dispatch.reduce_mut_callback(|state| state.logout());

    html! {
        <nav class="max-w-7xl mx-auto px-4 py-4 flex gap-4">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
            <Link<Route> to={Route::Settings}>{"Settings"}</Link<Route>>
            <Link<Route> to={Route::Admin}>{"Admin"}</Link<Route>>
            if let Some(user) = state.user() {
                <span>{user.username}</span>
                <button onclick={logout}>{"Log out"}</button>
            } else {
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
            }
        </nav>
    }
}
