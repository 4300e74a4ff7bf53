//! Commonly used errors

use figment::error::Kind;

/// Errors returned when an [`Option`] does not have the expected shape.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// A value was expected but the option is `None`.
    #[error("Expected a value to be present")]
    ExpectedSome,
    /// No value was expected but the option is `Some`.
    #[error("Expected no value to be present")]
    ExpectedNone,
    /// The option holds a value different from the expected one.
    #[error("Expected value to be {expected}, but got {actual}")]
    ValueMismatch {
        /// The expected value, formatted with `Debug`.
        expected: String,
        /// The value actually present, formatted with `Debug`.
        actual: String,
    },
}

impl AssertionError {
    pub(crate) fn mismatch(expected: &impl std::fmt::Debug, actual: &impl std::fmt::Debug) -> Self {
        Self::ValueMismatch { expected: format!("{expected:?}"), actual: format!("{actual:?}") }
    }
}

/// Represents a failed attempt to extract a [`ConversionConfig`](crate::ConversionConfig) from a
/// figment provider.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("failed to extract conversion config: {error}")]
pub struct ConfigError {
    #[source]
    error: figment::Error,
}

impl ConfigError {
    /// Wraps the figment error
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// Returns the underlying figment error.
    pub fn inner(&self) -> &figment::Error {
        &self.error
    }

    /// Returns `true` if extraction failed because a value had the wrong type, e.g.
    /// `MAYBE_CATCH_ERROR=maybe`.
    pub fn is_invalid_type(&self) -> bool {
        self.error.clone().into_iter().any(|err| matches!(err.kind, Kind::InvalidType(..)))
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::new(error)
    }
}
