// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Prefix of every namespace generated for a test
pub const NAMESPACE_PREFIX: &str = "ctrl-test-";

/// Namespace creation polling
pub mod poll {
    /// Delay between two create attempts
    pub const INTERVAL_SECS: u64 = 1;
    /// Total time allowed for namespace creation
    pub const TIMEOUT_SECS: u64 = 10;
}

/// Environment variables overriding the polling defaults
pub mod env {
    pub const POLL_INTERVAL_SECS: &str = "CTRL_TEST_POLL_INTERVAL_SECS";
    pub const TIMEOUT_SECS: &str = "CTRL_TEST_TIMEOUT_SECS";
}
