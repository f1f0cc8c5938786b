use std::fmt;
use std::rc::Rc;

use crate::error::ConfigError;
use crate::redirect::Navigate;
use crate::{DEFAULT_DISPLAY_NAME, DEFAULT_QUERY_PARAM};

/// What happens to an unauthorized visitor. Fixed for the lifetime of a
/// gate.
pub enum GateMode<V> {
    /// Navigate away to the failure redirect path.
    Redirect(Rc<dyn Navigate>),
    /// Stay put and render the failure view.
    Display(V),
}

impl<V: fmt::Debug> fmt::Debug for GateMode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect(_) => f.write_str("Redirect(..)"),
            Self::Display(view) => f.debug_tuple("Display").field(view).finish(),
        }
    }
}

/// Resolved, immutable gate configuration.
///
/// `P` is the [`AuthPolicy`](crate::AuthPolicy) and `V` the view type the
/// binding renders (loading and failure views).
pub struct GateConfig<P, V> {
    policy: P,
    loading: Option<V>,
    mode: GateMode<V>,
    redirect_query_param: String,
    allow_redirect_back: bool,
    display_name: String,
}

impl<P, V> GateConfig<P, V> {
    pub fn builder(policy: P) -> GateConfigBuilder<P, V> {
        GateConfigBuilder {
            policy,
            loading: None,
            failure: None,
            navigator: None,
            redirect_query_param: DEFAULT_QUERY_PARAM.to_string(),
            allow_redirect_back: true,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn loading(&self) -> Option<&V> {
        self.loading.as_ref()
    }

    pub fn mode(&self) -> &GateMode<V> {
        &self.mode
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.mode, GateMode::Redirect(_))
    }

    pub fn failure(&self) -> Option<&V> {
        match &self.mode {
            GateMode::Display(view) => Some(view),
            GateMode::Redirect(_) => None,
        }
    }

    pub fn redirect_query_param(&self) -> &str {
        &self.redirect_query_param
    }

    pub fn allow_redirect_back(&self) -> bool {
        self.allow_redirect_back
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Debug name of a wrapped component, e.g. `AuthWrapper(Dashboard)`.
    pub fn wrapped_name(&self, component: &str) -> String {
        let component = if component.is_empty() {
            "Component"
        } else {
            component
        };
        format!("{}({})", self.display_name, component)
    }
}

pub struct GateConfigBuilder<P, V> {
    policy: P,
    loading: Option<V>,
    failure: Option<V>,
    navigator: Option<Rc<dyn Navigate>>,
    redirect_query_param: String,
    allow_redirect_back: bool,
    display_name: String,
}

impl<P, V> GateConfigBuilder<P, V> {
    /// View shown while authentication is in flight. Without one, an empty
    /// placeholder is rendered.
    pub fn loading(mut self, view: V) -> Self {
        self.loading = Some(view);
        self
    }

    /// View shown to unauthorized visitors. Setting one switches the gate
    /// to display mode: it never redirects.
    pub fn failure(mut self, view: V) -> Self {
        self.failure = Some(view);
        self
    }

    /// Navigation used for redirects. Required unless a failure view is set.
    pub fn navigator(mut self, navigator: impl Navigate + 'static) -> Self {
        self.navigator = Some(Rc::new(navigator));
        self
    }

    pub fn redirect_query_param(mut self, name: impl Into<String>) -> Self {
        self.redirect_query_param = name.into();
        self
    }

    pub fn allow_redirect_back(mut self, allow: bool) -> Self {
        self.allow_redirect_back = allow;
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn build(self) -> Result<GateConfig<P, V>, ConfigError> {
        let mode = match (self.failure, self.navigator) {
            (Some(view), navigator) => {
                if navigator.is_some() {
                    tracing::debug!(
                        wrapper = %self.display_name,
                        "failure view configured, navigator ignored"
                    );
                }
                GateMode::Display(view)
            }
            (None, Some(navigator)) => GateMode::Redirect(navigator),
            (None, None) => {
                return Err(ConfigError::MissingNavigator {
                    wrapper: self.display_name,
                });
            }
        };

        if matches!(mode, GateMode::Redirect(_))
            && self.allow_redirect_back
            && self.redirect_query_param.is_empty()
        {
            return Err(ConfigError::EmptyQueryParam {
                wrapper: self.display_name,
            });
        }

        Ok(GateConfig {
            policy: self.policy,
            loading: self.loading,
            mode,
            redirect_query_param: self.redirect_query_param,
            allow_redirect_back: self.allow_redirect_back,
            display_name: self.display_name,
        })
    }
}
