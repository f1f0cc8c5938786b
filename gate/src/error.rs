#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "{wrapper} redirects unauthorized visitors but no navigator was \
         provided; pass one with `navigator` or configure a failure view"
    )]
    MissingNavigator { wrapper: String },
    #[error("{wrapper} allows redirect back but the query parameter is empty")]
    EmptyQueryParam { wrapper: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// Redirect mode needs the current location to build the return path.
    #[error("{wrapper} must redirect but no location was provided")]
    MissingLocation { wrapper: String },
}
