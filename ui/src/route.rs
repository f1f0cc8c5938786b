use gate::{AuthPolicy, Location, Navigate};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::guarded::use_gate_location;
use crate::wrapper::AuthWrapper;

/// Decide whether entering `location` must redirect, before anything behind
/// the wrapper renders. Never redirects when the wrapper displays a failure
/// view.
pub fn enter_route<P>(
    wrapper: &AuthWrapper<P>,
    state: &P::State,
    location: &Location,
    replace: &dyn Navigate,
) -> bool
where
    P: AuthPolicy + 'static,
    P::State: Store,
    P::Data: Clone + 'static,
{
    wrapper
        .route_guard()
        .is_some_and(|guard| guard.on_enter(state, location, replace))
}

/// Runs [`enter_route`] once per visited location. Returns true if the
/// latest entry redirected, in which case the route should render nothing.
#[hook]
pub fn use_route_guard<P>(
    wrapper: AuthWrapper<P>,
    replace: Rc<dyn Navigate>,
) -> bool
where
    P: AuthPolicy + 'static,
    P::State: Store,
    P::Data: Clone + 'static,
{
    let state = use_store_value::<P::State>();
    let location = use_gate_location();
    let entered = use_mut_ref(|| None::<(Location, bool)>);

    let Some(location) = location else {
        return false;
    };
    let mut entered = entered.borrow_mut();
    match entered.as_ref() {
        Some((last, redirected)) if *last == location => *redirected,
        _ => {
            let redirected =
                enter_route(&wrapper, &state, &location, replace.as_ref());
            *entered = Some((location, redirected));
            redirected
        }
    }
}
