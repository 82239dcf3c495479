use crate::config::RemoteConfig;
use anyhow::{Context, Error as Anyhow};
use lib::remote::Http;
use reqwest::Url;

/// Trait for types that build other types.
pub trait Build {
    /// The type to be built.
    type Output;

    /// The reason why [`Build::Output`] could not be built.
    type Error;

    /// Build an instance of [`Build::Output`].
    fn build(self) -> Result<Self::Output, Self::Error>;
}

impl Build for RemoteConfig {
    type Output = Http;
    type Error = Anyhow;

    fn build(self) -> Result<Self::Output, Self::Error> {
        match self {
            RemoteConfig::Http(url, options) => {
                let base: Url = url.parse().with_context(|| format!("invalid url `{url}`"))?;
                Ok(Http::new(base, options.timeout)?)
            }
        }
    }
}
