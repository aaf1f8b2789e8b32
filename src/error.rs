// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error(
        "Timed out after {timeout:?} creating namespace with prefix {prefix} ({attempts} attempts){}",
        .last_error.as_ref().map(|e| format!(": {}", e)).unwrap_or_default()
    )]
    NamespaceTimeout {
        prefix: String,
        timeout: Duration,
        attempts: usize,
        /// `None` when no attempt finished before the deadline
        #[source]
        last_error: Option<kube::Error>,
    },

    #[error("Namespace created from prefix {0} has no name")]
    UnnamedNamespace(String),

    #[error("Invalid fixture configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
