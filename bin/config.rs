use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

/// The reason why parsing remote configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse remote configuration")]
pub struct ParseRemoteConfigError(ron::de::SpannedError);

/// Tuning knobs for an HTTP remote.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpOptions {
    /// How long to wait for a response, forever if unset.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

/// Runtime configuration for the remote engine.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum RemoteConfig {
    /// An engine served over HTTP at the given base URL.
    Http(String, #[serde(default)] HttpOptions),
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig::Http("http://127.0.0.1:8000".into(), HttpOptions::default())
    }
}

impl fmt::Display for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for RemoteConfig {
    type Err = ParseRemoteConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
