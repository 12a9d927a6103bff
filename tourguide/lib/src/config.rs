//! Client configuration.
//!
//! A [`ClientConfig`] carries the base URL, the bearer token and the identity
//! stamped onto every write. It is fixed for the life of a client.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const ENV_API_URL: &str = "TOURGUIDE_API_URL";
/// Environment variable holding the bearer token.
pub const ENV_API_TOKEN: &str = "TOURGUIDE_API_TOKEN";
/// Environment variable holding the identity string.
pub const ENV_USERNAME: &str = "TOURGUIDE_USERNAME";

/// Body field that receives the configured identity on every write.
pub const IDENTITY_FIELD: &str = "username";

/// Connection settings for an [`ApiClient`](crate::ApiClient).
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    token: String,
    username: String,
}

impl ClientConfig {
    /// Creates a configuration after validating each field.
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL does not parse or is not http(s), or if the
    /// token or username is empty.
    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: base_url.scheme().to_string(),
            });
        }

        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::missing_field("token"));
        }
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::missing_field("username"));
        }

        Ok(Self {
            base_url,
            token,
            username,
        })
    }

    /// Reads [`ENV_API_URL`], [`ENV_API_TOKEN`] and [`ENV_USERNAME`] from the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as missing. Variables are checked in the order
    /// URL, token, username and the first missing one is reported.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingEnv { var })
        };

        let base_url = require(ENV_API_URL)?;
        let token = require(ENV_API_TOKEN)?;
        let username = require(ENV_USERNAME)?;
        Self::new(&base_url, token, username)
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The identity stamped onto write bodies.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}
