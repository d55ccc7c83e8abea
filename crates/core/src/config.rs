//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services. Request
//! handlers never read environment variables.

use crate::constants::{DEFAULT_REST_ADDR, ILLNESS_PROFILES, SYMPTOM_CATALOG};
use crate::validation::validate_tables;
use crate::{CheckerResult, IllnessProfile};
use std::net::SocketAddr;

/// Validated symptom catalog and illness profile table.
#[derive(Clone, Copy, Debug)]
pub struct CheckerConfig {
    catalog: &'static [&'static str],
    profiles: &'static [IllnessProfile],
}

impl CheckerConfig {
    /// Create a new `CheckerConfig`, validating the tables.
    pub fn new(
        catalog: &'static [&'static str],
        profiles: &'static [IllnessProfile],
    ) -> CheckerResult<Self> {
        validate_tables(catalog, profiles)?;
        Ok(Self { catalog, profiles })
    }

    /// The built-in reference tables, validated.
    pub fn reference() -> CheckerResult<Self> {
        Self::new(SYMPTOM_CATALOG, ILLNESS_PROFILES)
    }

    pub fn catalog(&self) -> &'static [&'static str] {
        self.catalog
    }

    pub fn profiles(&self) -> &'static [IllnessProfile] {
        self.profiles
    }
}

impl Default for CheckerConfig {
    /// The reference tables, without re-running validation.
    fn default() -> Self {
        Self {
            catalog: SYMPTOM_CATALOG,
            profiles: ILLNESS_PROFILES,
        }
    }
}

/// Parse the REST bind address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> CheckerResult<SocketAddr> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());

    Ok(value.parse::<SocketAddr>()?)
}
