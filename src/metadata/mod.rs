// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Assertion helpers over `ObjectMeta`

pub mod managed_fields;
pub mod owners;

pub use managed_fields::first_managed_field_for_manager;
pub use owners::has_owner_ref;
