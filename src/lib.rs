// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helpers for controller integration tests: throwaway namespaces and
//! assertions over object metadata.

pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod metadata;


pub use config::FixtureConfig;
pub use error::{FixtureError, Result};
pub use kubernetes::{create_namespace, create_namespace_with_config, create_namespace_with_labels};
pub use metadata::{first_managed_field_for_manager, has_owner_ref};
