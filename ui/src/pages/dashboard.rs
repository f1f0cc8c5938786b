use yew::prelude::*;

use super::config_error;
use crate::state::User;
use crate::wrapper::WithAuthData;
use crate::wrappers;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct DashboardProps {
    #[prop_or_default]
    pub user: Option<User>,
}

impl WithAuthData<Option<User>> for DashboardProps {
    fn with_auth_data(&self, auth_data: Option<User>) -> Self {
        Self { user: auth_data }
    }
}

#[function_component]
pub fn Dashboard(props: &DashboardProps) -> Html {
    let username = props
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();
    html! {
        <div class="space-y-2">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">{"Dashboard"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400">{format!("Signed in as {username}")}</p>
        </div>
    }
}

#[function_component]
pub fn DashboardRoute() -> Html {
    let wrapper = use_memo((), |_| wrappers::user_is_authenticated());
    match wrapper.as_ref() {
        Ok(wrapper) => wrapper.wrap::<Dashboard>(DashboardProps::default()),
        Err(e) => config_error(e),
    }
}
