use gate::{AuthGate, AuthPolicy, GateConfig, Location, RouteGuard};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::guarded::Guarded;

/// Loading and failure views. They receive the pass-through props instead
/// of the auth data.
pub type GateView = Callback<PassThrough, Html>;

pub type WrapperConfig<P> = GateConfig<P, GateView>;

/// Props forwarded to the loading and failure views.
#[derive(Debug, Clone, PartialEq)]
pub struct PassThrough {
    pub location: Option<Location>,
    pub failure_redirect_path: String,
}

/// Implemented by the props of protected components to receive the auth
/// data alongside their own props.
pub trait WithAuthData<D> {
    fn with_auth_data(&self, auth_data: D) -> Self;
}

/// An auth gate ready to wrap protected components.
///
/// Cheap to clone; clones share the gate and compare equal.
pub struct AuthWrapper<P> {
    gate: Rc<AuthGate<P, GateView>>,
}

impl<P> Clone for AuthWrapper<P> {
    fn clone(&self) -> Self {
        Self {
            gate: Rc::clone(&self.gate),
        }
    }
}

impl<P> PartialEq for AuthWrapper<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gate, &other.gate)
    }
}

impl<P> AuthWrapper<P>
where
    P: AuthPolicy + 'static,
    P::State: Store,
    P::Data: Clone + 'static,
{
    pub fn new(config: WrapperConfig<P>) -> Self {
        Self {
            gate: Rc::new(AuthGate::new(config)),
        }
    }

    pub fn gate(&self) -> &AuthGate<P, GateView> {
        &self.gate
    }

    /// Debug name of `C` once wrapped, e.g. `UserIsAdmin(AdminPanel)`.
    pub fn display_name<C: BaseComponent>(&self) -> String {
        let name = std::any::type_name::<C>()
            .split('<')
            .next()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or_default();
        self.gate.config().wrapped_name(name)
    }

    /// Render `C` behind the gate. The auth data is merged into `props`
    /// every time the protected view renders.
    pub fn wrap<C>(&self, props: C::Properties) -> Html
    where
        C: BaseComponent,
        C::Properties: WithAuthData<P::Data> + 'static,
    {
        let protected = Callback::from(move |auth_data: P::Data| {
            let props = props.with_auth_data(auth_data);
            html! { <C ..props /> }
        });
        html! {
            <Guarded<P> wrapper={self.clone()} {protected} />
        }
    }

    /// Route-entry hook, `None` when the gate displays a failure view.
    pub fn route_guard(&self) -> Option<RouteGuard<'_, P, GateView>> {
        self.gate.route_guard()
    }
}
