// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace controller - watches namespaces and binds the group in each new one.

use crate::controllers::tracker::NamespaceTracker;
use crate::rbac::{create_role_binding, BindingSettings};
use futures::StreamExt;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    runtime::{watcher, WatchStreamExt},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Event;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

pub struct NamespaceController {
    client: Client,
    settings: BindingSettings,
    tracker: NamespaceTracker,
}

impl NamespaceController {
    pub fn new(client: Client, settings: BindingSettings) -> Self {
        Self {
            client,
            settings,
            tracker: NamespaceTracker::new(),
        }
    }

    /// Watch namespaces until `shutdown` fires or the watch stream ends
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let mut events = watcher(namespaces, watcher::Config::default())
            .default_backoff()
            .boxed();

        info!("Watching namespaces");

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("Stopping namespace watch");
                    break;
                }
                next = events.next() => match next {
                    Some(Ok(event)) => {
                        self.handle_event(event).await;
                    }
                    Some(Err(e)) => warn!("Namespace watch error: {}", e),
                    None => {
                        warn!("Namespace watch stream ended unexpectedly");
                        break;
                    }
                },
            }
        }

        Ok(())
    }

    /// Create a RoleBinding for every namespace the event adds.
    /// Failures are logged and not retried. Returns the number of bindings created.
    pub async fn handle_event(&mut self, event: Event<Namespace>) -> usize {
        let mut created = 0;

        for ns in self.tracker.observe(event) {
            let namespace = ns.name_any();
            debug!("New namespace observed: {}", namespace);

            match create_role_binding(&self.client, &namespace, &self.settings).await {
                Ok(binding) => {
                    info!(
                        "Created RoleBinding {} for namespace {}",
                        binding.name_any(),
                        namespace
                    );
                    created += 1;
                }
                Err(e) => {
                    error!(
                        "Failed to create RoleBinding in namespace {}: {}",
                        namespace, e
                    );
                }
            }
        }

        created
    }
}
