use gate::{AuthPolicy, Location, Render, Snapshot};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::wrapper::{AuthWrapper, PassThrough};

#[derive(Properties)]
pub struct GuardedProps<P>
where
    P: AuthPolicy + 'static,
{
    pub wrapper: AuthWrapper<P>,
    /// Renders the protected view for the given auth data.
    pub protected: Callback<P::Data, Html>,
}

impl<P> PartialEq for GuardedProps<P>
where
    P: AuthPolicy + 'static,
{
    fn eq(&self, other: &Self) -> bool {
        self.wrapper == other.wrapper && self.protected == other.protected
    }
}

/// Current router location, if rendered inside a router.
#[hook]
pub fn use_gate_location() -> Option<Location> {
    use_location().map(|location| {
        Location::new(location.path(), location.query_str())
    })
}

/// Renders the protected view, the loading view, or the failure view
/// depending on the store, redirecting when access is lost.
#[function_component(Guarded)]
pub fn guarded<P>(props: &GuardedProps<P>) -> Html
where
    P: AuthPolicy + 'static,
    P::State: Store,
    P::Data: Clone + 'static,
{
    let state = use_store_value::<P::State>();
    let location = use_gate_location();
    let previous = use_mut_ref(|| None::<Snapshot>);

    let gate = props.wrapper.gate();
    let gate_props = gate.derive(&state);

    let prev = previous.borrow_mut().replace(gate.snapshot(&gate_props));
    let checked = match prev {
        None => gate.on_mount(&gate_props, location.as_ref()),
        Some(prev) => gate.on_update(prev, &gate_props, location.as_ref()),
    };
    if let Err(e) = checked {
        tracing::error!("{e}");
        return html! {};
    }

    let pass_through = PassThrough {
        location,
        failure_redirect_path: gate_props.failure_redirect_path.clone(),
    };
    match gate.decide(&gate_props) {
        Render::Protected(auth_data) => props.protected.emit(auth_data.clone()),
        Render::Loading(view) | Render::Failure(view) => view
            .map(|view| view.emit(pass_through))
            .unwrap_or_default(),
    }
}
