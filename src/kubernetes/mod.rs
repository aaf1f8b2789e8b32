// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixtures that talk to the Kubernetes API.

pub mod namespaces;

pub use namespaces::{create_namespace, create_namespace_with_config, create_namespace_with_labels};
