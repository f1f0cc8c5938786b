use yew::prelude::*;

use super::config_error;
use crate::state::User;
use crate::wrapper::WithAuthData;
use crate::wrappers;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct SettingsProps {
    #[prop_or_default]
    pub admin: Option<User>,
}

impl WithAuthData<Option<User>> for SettingsProps {
    fn with_auth_data(&self, auth_data: Option<User>) -> Self {
        Self { admin: auth_data }
    }
}

#[function_component]
pub fn Settings(_props: &SettingsProps) -> Html {
    html! {
        <div class="space-y-2">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">{"Settings"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400">{"Site-wide settings go here."}</p>
        </div>
    }
}

#[function_component]
pub fn SettingsRoute() -> Html {
    let wrapper = use_memo((), |_| wrappers::visible_only_admin());
    match wrapper.as_ref() {
        Ok(wrapper) => wrapper.wrap::<Settings>(SettingsProps::default()),
        Err(e) => config_error(e),
    }
}
