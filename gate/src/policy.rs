//! The capability a gate consults to read auth state and judge it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;

use crate::redirect::RedirectPath;

/// Reads authentication state out of the application store and decides
/// whether it grants access.
///
/// Implement this directly for custom use cases, or build one from closures
/// with [`Selectors`].
pub trait AuthPolicy {
    type State;
    type Data;

    /// Select the auth data. `initial_load` is true when called from a
    /// route-entry guard, before anything has rendered.
    fn resolve_auth_data(
        &self,
        state: &Self::State,
        initial_load: bool,
    ) -> Self::Data;

    fn is_authenticating(&self, _state: &Self::State) -> bool {
        false
    }

    fn is_authorized(&self, data: &Self::Data) -> bool;

    fn resolve_redirect_path(&self, _state: &Self::State) -> String {
        crate::DEFAULT_REDIRECT_PATH.to_string()
    }
}

/// Values that can be "empty", in the sense used by the default predicate.
///
/// Absent values, empty strings and empty collections are empty. Numbers
/// and booleans never are, so `0` and `false` count as present auth data.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

/// Default predicate: authorized when the auth data is not empty.
pub fn non_empty<D: IsEmpty + ?Sized>(data: &D) -> bool {
    !data.is_empty_value()
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, H> IsEmpty for HashMap<K, V, H> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, H> IsEmpty for HashSet<T, H> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(IsEmpty::is_empty_value)
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for Box<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for Rc<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl IsEmpty for () {
    fn is_empty_value(&self) -> bool {
        true
    }
}

impl IsEmpty for serde_json::Value {
    fn is_empty_value(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => true,
            Value::Bool(_) | Value::Number(_) => false,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

impl IsEmpty for serde_json::Map<String, serde_json::Value> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! never_empty {
    ($($t:ty),*) => {
        $(
            impl IsEmpty for $t {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64
);

/// An [`AuthPolicy`] assembled from selector closures.
///
/// Starts from the same defaults as a bare configuration: nobody is ever
/// authenticating, the predicate is [`non_empty`], and failures go to
/// `/login`.
pub struct Selectors<S, D> {
    auth: Rc<dyn Fn(&S, bool) -> D>,
    authenticating: Rc<dyn Fn(&S) -> bool>,
    predicate: Rc<dyn Fn(&D) -> bool>,
    redirect_path: RedirectPath<S>,
}

impl<S: 'static, D: IsEmpty + 'static> Selectors<S, D> {
    pub fn new(auth: impl Fn(&S, bool) -> D + 'static) -> Self {
        Self::with_predicate(auth, non_empty::<D>)
    }
}

impl<S: 'static, D: 'static> Selectors<S, D> {
    pub fn with_predicate(
        auth: impl Fn(&S, bool) -> D + 'static,
        predicate: impl Fn(&D) -> bool + 'static,
    ) -> Self {
        Self {
            auth: Rc::new(auth),
            authenticating: Rc::new(|_: &S| false),
            predicate: Rc::new(predicate),
            redirect_path: RedirectPath::default(),
        }
    }

    pub fn authenticating(
        mut self,
        selector: impl Fn(&S) -> bool + 'static,
    ) -> Self {
        self.authenticating = Rc::new(selector);
        self
    }

    pub fn predicate(mut self, predicate: impl Fn(&D) -> bool + 'static) -> Self {
        self.predicate = Rc::new(predicate);
        self
    }

    pub fn redirect_path(mut self, path: impl Into<RedirectPath<S>>) -> Self {
        self.redirect_path = path.into();
        self
    }
}

impl<S, D> Clone for Selectors<S, D> {
    fn clone(&self) -> Self {
        Self {
            auth: Rc::clone(&self.auth),
            authenticating: Rc::clone(&self.authenticating),
            predicate: Rc::clone(&self.predicate),
            redirect_path: self.redirect_path.clone(),
        }
    }
}

impl<S, D> AuthPolicy for Selectors<S, D> {
    type State = S;
    type Data = D;

    fn resolve_auth_data(&self, state: &S, initial_load: bool) -> D {
        (self.auth)(state, initial_load)
    }

    fn is_authenticating(&self, state: &S) -> bool {
        (self.authenticating)(state)
    }

    fn is_authorized(&self, data: &D) -> bool {
        (self.predicate)(data)
    }

    fn resolve_redirect_path(&self, state: &S) -> String {
        self.redirect_path.resolve(state)
    }
}
