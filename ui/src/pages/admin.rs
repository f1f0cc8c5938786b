use gate::Navigate;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use super::config_error;
use crate::navigate::HistoryNavigator;
use crate::route::use_route_guard;
use crate::state::{State, User};
use crate::wrapper::{AuthWrapper, WithAuthData};
use crate::wrappers::{self, UserPolicy};

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AdminPanelProps {
    #[prop_or_default]
    pub admin: Option<User>,
}

impl WithAuthData<Option<User>> for AdminPanelProps {
    fn with_auth_data(&self, auth_data: Option<User>) -> Self {
        Self { admin: auth_data }
    }
}

#[function_component]
pub fn AdminPanel(props: &AdminPanelProps) -> Html {
    let name = props
        .admin
        .as_ref()
        .map(|admin| admin.username.clone())
        .unwrap_or_default();
    html! {
        <div class="space-y-2">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">{"Administration"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400">{format!("Welcome, {name}.")}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AdminEntryProps {
    wrapper: AuthWrapper<UserPolicy>,
}

/// Checks access when the route is entered, before the panel renders.
#[function_component]
fn AdminEntry(props: &AdminEntryProps) -> Html {
    let replace: Rc<dyn Navigate> = Rc::new(HistoryNavigator::browser());
    let redirected = use_route_guard(props.wrapper.clone(), replace);
    if redirected {
        return html! {};
    }
    props.wrapper.wrap::<AdminPanel>(AdminPanelProps::default())
}

#[function_component]
pub fn AdminRoute() -> Html {
    let dispatch = use_dispatch::<State>();
    let wrapper = use_memo((), move |_| wrappers::user_is_admin(dispatch));
    match wrapper.as_ref() {
        Ok(wrapper) => html! { <AdminEntry wrapper={wrapper.clone()} /> },
        Err(e) => config_error(e),
    }
}
