use std::fmt::Display;

/// Everything that can stop a lookup before a [`crate::WeatherView`] exists.
///
/// The `Display` text is what the user sees in the failed view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a city name.")]
    Validation,

    #[error("City not found. Please try another city.")]
    NotFound,

    #[error("{0}")]
    Transport(String),
}

impl LookupError {
    /// Wrap an underlying failure as a transport error, prefixed with what was being attempted.
    pub fn transport(context: impl Display, err: impl Display) -> Self {
        LookupError::Transport(format!("{context}: {err}"))
    }
}
