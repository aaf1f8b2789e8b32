// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace fixtures

use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tokio::time::{sleep_until, timeout_at, Instant};
use tracing::{debug, info, instrument, warn};

/// Create a fresh `ctrl-test-<base_name>` namespace without labels
pub async fn create_namespace(client: &Client, base_name: &str) -> Result<String> {
    create_namespace_with_labels(client, base_name, BTreeMap::new()).await
}

/// Create a fresh `ctrl-test-<base_name>` namespace carrying `labels`
pub async fn create_namespace_with_labels(
    client: &Client,
    base_name: &str,
    labels: BTreeMap<String, String>,
) -> Result<String> {
    create_namespace_with_config(client, base_name, labels, &FixtureConfig::default()).await
}

/// Create a namespace whose name the API server generates from the configured
/// prefix and `base_name`, and return that name.
///
/// The first attempt is made immediately and further attempts start every
/// `config.poll_interval` until one succeeds. Nothing, including an attempt
/// still in flight, runs past `config.timeout`; only running out of time is
/// reported, together with the error of the last finished attempt.
#[instrument(skip(client, labels, config))]
pub async fn create_namespace_with_config(
    client: &Client,
    base_name: &str,
    labels: BTreeMap<String, String>,
    config: &FixtureConfig,
) -> Result<String> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let prefix = config.generate_name(base_name);
    let ns = Namespace {
        metadata: ObjectMeta {
            generate_name: Some(prefix.clone()),
            labels: (!labels.is_empty()).then_some(labels),
            ..Default::default()
        },
        ..Default::default()
    };

    let Some(deadline) = Instant::now().checked_add(config.timeout) else {
        return Err(FixtureError::Config(format!(
            "timeout {:?} is too large",
            config.timeout
        )));
    };
    let mut attempts = 0;
    let mut last_error = None;

    loop {
        attempts += 1;
        let attempt_start = Instant::now();
        match timeout_at(deadline, namespaces.create(&PostParams::default(), &ns)).await {
            Ok(Ok(created)) => {
                let Some(name) = created.metadata.name else {
                    return Err(FixtureError::UnnamedNamespace(prefix));
                };
                info!("Namespace {} created after {} attempt(s)", name, attempts);
                return Ok(name);
            }
            Ok(Err(e)) => {
                debug!(
                    "Attempt {} to create namespace with prefix {} failed: {}",
                    attempts, prefix, e
                );
                last_error = Some(e);
            }
            Err(_) => {
                debug!(
                    "Attempt {} to create namespace with prefix {} still pending at the deadline",
                    attempts, prefix
                );
            }
        }

        // attempts start on a fixed schedule, however long each call took
        let next_attempt = attempt_start
            .checked_add(config.poll_interval)
            .filter(|next| *next < deadline && Instant::now() < deadline);
        let Some(next_attempt) = next_attempt else {
            sleep_until(deadline).await;
            warn!(
                "Giving up creating namespace with prefix {} after {} attempts",
                prefix, attempts
            );
            return Err(FixtureError::NamespaceTimeout {
                prefix,
                timeout: config.timeout,
                attempts,
                last_error,
            });
        };

        sleep_until(next_attempt).await;
    }
}
