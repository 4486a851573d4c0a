//! Settings for a DIAL deployment and their resolution from the environment.

use std::str::FromStr;

use super::error::DialError;

/// Fallback values shared by explicit construction and environment
/// resolution.
pub mod defaults {
    pub const API_VERSION: &str = "2024-02-15-preview";
    pub const MODEL: &str = "gpt-4";
    pub const TEMPERATURE: f32 = 0.0;
    pub const MAX_TOKENS: u32 = 1000;
    pub const TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names, one per [`DialSettings`] field.
pub mod env_vars {
    pub const API_KEY: &str = "DIAL_API_KEY";
    pub const API_URL: &str = "DIAL_API_URL";
    pub const API_VERSION: &str = "DIAL_API_VERSION";
    pub const MODEL: &str = "MODEL_NAME";
    pub const TEMPERATURE: &str = "TEMPERATURE";
    pub const MAX_TOKENS: &str = "MAX_TOKENS";
    pub const TIMEOUT_SECS: &str = "TIMEOUT_SECONDS";
}

/// Resolved configuration for one client instance.
///
/// Immutable once constructed; a client holds it for its lifetime and no
/// hot-reload exists. An empty credential is accepted here and only rejected
/// by the provider on the first call.
#[derive(Debug, Clone, PartialEq)]
pub struct DialSettings {
    /// API key sent in the `api-key` header.
    pub api_key: String,
    /// Base URL of the DIAL deployment, without a trailing path.
    pub api_url: String,
    pub api_version: String,
    /// Deployment/model identifier.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: String::new(),
            api_version: defaults::API_VERSION.to_string(),
            model: defaults::MODEL.to_string(),
            temperature: defaults::TEMPERATURE,
            max_tokens: defaults::MAX_TOKENS,
            timeout_secs: defaults::TIMEOUT_SECS,
        }
    }
}

impl DialSettings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, DialError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    ///
    /// Absent variables fall back to [`defaults`]; a numeric variable that
    /// is present but does not parse is a [`DialError::Configuration`].
    pub fn from_env_with<F>(lookup: F) -> Result<Self, DialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback = Self::default();

        Ok(Self {
            api_key: lookup(env_vars::API_KEY).unwrap_or_default(),
            api_url: lookup(env_vars::API_URL).unwrap_or_default(),
            api_version: lookup(env_vars::API_VERSION).unwrap_or(fallback.api_version),
            model: lookup(env_vars::MODEL).unwrap_or(fallback.model),
            temperature: parse_numeric(
                env_vars::TEMPERATURE,
                lookup(env_vars::TEMPERATURE),
                fallback.temperature,
            )?,
            max_tokens: parse_numeric(
                env_vars::MAX_TOKENS,
                lookup(env_vars::MAX_TOKENS),
                fallback.max_tokens,
            )?,
            timeout_secs: parse_numeric(
                env_vars::TIMEOUT_SECS,
                lookup(env_vars::TIMEOUT_SECS),
                fallback.timeout_secs,
            )?,
        })
    }
}

fn parse_numeric<T: FromStr>(
    name: &str,
    value: Option<String>,
    fallback: T,
) -> Result<T, DialError> {
    match value {
        None => Ok(fallback),
        Some(raw) => raw.trim().parse().map_err(|_| {
            DialError::Configuration(format!("{name} must be numeric, got {raw:?}"))
        }),
    }
}
