// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tracks which namespaces the watch has already delivered, so only
//! namespaces that are new to this process trigger the callback.

use k8s_openapi::api::core::v1::Namespace;
use kube::ResourceExt;
use kube_runtime::watcher::Event;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Default)]
pub struct NamespaceTracker {
    /// Namespaces seen so far, keyed by uid
    known: HashSet<String>,
    /// Namespaces seen by a relist that has not completed yet
    relisted: Option<HashSet<String>>,
}

impl NamespaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Apply a watch event and return the namespaces it added
    pub fn observe(&mut self, event: Event<Namespace>) -> Vec<Namespace> {
        match event {
            Event::Init => {
                debug!("Namespace relist started");
                self.relisted = Some(HashSet::new());
                Vec::new()
            }
            Event::InitApply(ns) => {
                let key = tracking_key(&ns);
                self.relisted.get_or_insert_with(HashSet::new).insert(key.clone());
                self.added(key, ns)
            }
            Event::InitDone => {
                if let Some(relisted) = self.relisted.take() {
                    debug!(
                        "Namespace relist done: {} namespaces, {} forgotten",
                        relisted.len(),
                        self.known.difference(&relisted).count()
                    );
                    self.known = relisted;
                }
                Vec::new()
            }
            Event::Apply(ns) => {
                let key = tracking_key(&ns);
                self.added(key, ns)
            }
            Event::Delete(ns) => {
                debug!("Namespace {} deleted", ns.name_any());
                self.known.remove(&tracking_key(&ns));
                Vec::new()
            }
        }
    }

    fn added(&mut self, key: String, ns: Namespace) -> Vec<Namespace> {
        if self.known.insert(key) {
            vec![ns]
        } else {
            debug!("Namespace {} already known, ignoring update", ns.name_any());
            Vec::new()
        }
    }
}

// A namespace deleted and recreated under the same name gets a new uid.
fn tracking_key(ns: &Namespace) -> String {
    ns.uid().unwrap_or_else(|| ns.name_any())
}
