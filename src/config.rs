// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as env_vars, poll, NAMESPACE_PREFIX};
use crate::error::{FixtureError, Result};
use anyhow::Context;
use std::env;
use std::time::Duration;

/// Settings for the namespace fixtures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Prepended to the caller's base name to form `metadata.generateName`
    pub name_prefix: String,
    pub poll_interval: Duration,
    /// Upper bound on the time spent creating a namespace
    pub timeout: Duration,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            name_prefix: NAMESPACE_PREFIX.to_string(),
            poll_interval: Duration::from_secs(poll::INTERVAL_SECS),
            timeout: Duration::from_secs(poll::TIMEOUT_SECS),
        }
    }
}

impl FixtureConfig {
    /// Load the defaults, overridden by `CTRL_TEST_*` environment variables when set
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
            .context("Failed to load fixture configuration from environment")
    }

    /// Same as [`FixtureConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FixtureConfig::default();

        if let Some(value) = lookup(env_vars::POLL_INTERVAL_SECS) {
            config.poll_interval = parse_secs(env_vars::POLL_INTERVAL_SECS, &value)?;
        }
        if let Some(value) = lookup(env_vars::TIMEOUT_SECS) {
            config.timeout = parse_secs(env_vars::TIMEOUT_SECS, &value)?;
        }

        Ok(config)
    }

    /// The `generateName` sent for a given base name
    pub fn generate_name(&self, base_name: &str) -> String {
        format!("{}{}", self.name_prefix, base_name)
    }
}

fn parse_secs(key: &str, value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(FixtureError::Config(format!("{} must be greater than zero", key))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(FixtureError::Config(format!(
            "{} has invalid value '{}': {}",
            key, value, e
        ))),
    }
}
