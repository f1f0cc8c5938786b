use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The location the protected view was requested at.
///
/// Displays as `pathname` followed by `search`, which is the form stored in
/// the return-path query parameter.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Display, Serialize, Deserialize,
)]
#[display("{pathname}{search}")]
pub struct Location {
    pub pathname: String,
    /// Query string including its leading `?`, or empty.
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Split a path at the first `?`. The search part keeps the `?`.
    pub fn parse(path: &str) -> Self {
        match path.find('?') {
            Some(idx) => Self::new(&path[..idx], &path[idx..]),
            None => Self::new(path, ""),
        }
    }
}
