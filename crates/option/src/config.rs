//! Configuration for the conversion helpers.

use crate::errors::ConfigError;
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Serialized},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};

/// Policy applied by the `*_configured` conversions in [`from`](crate::from).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Whether a failing future is turned into `None` (`true`) or its error handed back.
    pub catch_error: bool,
}

impl ConversionConfig {
    /// Prefix of the environment variables read by [`ConversionConfig::figment`].
    pub const ENV_PREFIX: &'static str = "MAYBE_";

    /// Returns the config merged from the defaults and the environment.
    ///
    /// # Panics
    ///
    /// If extraction fails, e.g. `MAYBE_CATCH_ERROR` is not a boolean. For a version that doesn't
    /// panic, use [`ConversionConfig::try_from`].
    #[track_caller]
    pub fn load() -> Self {
        Self::from_provider(Self::figment())
    }

    /// Extract a `ConversionConfig` from `provider`, panicking if extraction fails.
    #[track_caller]
    pub fn from_provider<T: Provider>(provider: T) -> Self {
        trace!("load conversion config with provider: {:?}", provider.metadata());
        Self::try_from(provider).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Attempts to extract a `ConversionConfig` from `provider`.
    ///
    /// # Example
    ///
    /// ```
    /// use figment::providers::Serialized;
    /// use maybe_option::ConversionConfig;
    ///
    /// let figment = ConversionConfig::figment()
    ///     .merge(Serialized::default("catch_error", false));
    /// let config = ConversionConfig::try_from(figment).unwrap();
    /// assert!(!config.catch_error);
    /// ```
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ConfigError> {
        Figment::from(provider).extract::<Self>().map_err(ConfigError::new)
    }

    /// Returns the default figment: the default values, overridden by `MAYBE_*` environment
    /// variables.
    pub fn figment() -> Figment {
        Figment::from(Self::default()).merge(Env::prefixed(Self::ENV_PREFIX))
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self { catch_error: true }
    }
}

impl Provider for ConversionConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("ConversionConfig defaults")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}
