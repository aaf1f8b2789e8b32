// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::ObjectMeta;
use tracing::trace;

/// Return the `fieldsV1` JSON of the first `metadata.managedFields` entry written by `manager`.
///
/// The payload is re-serialized from its parsed form as compact JSON with object keys
/// in sorted order, so it can differ byte-wise from what the API server sent; compare
/// against JSON literals with sorted keys or parse it back. An entry without a
/// `fieldsV1` payload yields an empty string. When `manager` owns no entry at all a
/// readable placeholder is returned so it shows up in assertion diffs.
pub fn first_managed_field_for_manager(meta: &ObjectMeta, manager: &str) -> String {
    let entry = meta
        .managed_fields
        .iter()
        .flatten()
        .find(|entry| entry.manager.as_deref() == Some(manager));

    match entry {
        Some(entry) => entry
            .fields_v1
            .as_ref()
            .map(|fields| fields.0.to_string())
            .unwrap_or_default(),
        None => {
            trace!("No managedFields entry for manager {}", manager);
            format!("No managed fields managed by {}", manager)
        }
    }
}
