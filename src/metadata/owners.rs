// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::ObjectMeta;

/// Check whether `meta` lists an owner reference with exactly this kind and name
pub fn has_owner_ref(meta: &ObjectMeta, kind: &str, name: &str) -> bool {
    meta.owner_references
        .as_ref()
        .is_some_and(|refs| refs.iter().any(|r| r.kind == kind && r.name == name))
}
