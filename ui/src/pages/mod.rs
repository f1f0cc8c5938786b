pub mod admin;
pub mod dashboard;
pub mod login;
pub mod settings;

pub use admin::AdminRoute;
pub use dashboard::DashboardRoute;
pub use login::LoginPage;
pub use settings::SettingsRoute;

use gate::ConfigError;
use yew::prelude::*;

/// Shown in place of a route whose gate could not be configured.
fn config_error(e: &ConfigError) -> Html {
    tracing::error!("{e}");
    html! {
        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
            <p class="text-sm text-red-700 dark:text-red-400">{e.to_string()}</p>
        </div>
    }
}
