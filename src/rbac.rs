// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! RoleBinding construction and creation for a namespace

use crate::constants::{binding, RBAC_API_GROUP};
use crate::error::Result;
use k8s_openapi::api::rbac::v1::{RoleBinding, RoleRef, Subject};
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// What gets bound in every namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSettings {
    /// Prefix shared by the binding name and the bound group
    pub prefix: String,
    /// ClusterRole referenced by the binding
    pub cluster_role: String,
}

impl Default for BindingSettings {
    fn default() -> Self {
        Self {
            prefix: binding::DEFAULT_PREFIX.to_string(),
            cluster_role: binding::DEFAULT_CLUSTER_ROLE.to_string(),
        }
    }
}

/// Deterministic name used for both the binding and its group subject
pub fn role_binding_name(prefix: &str, namespace: &str) -> String {
    format!("{}-{}", prefix, namespace)
}

/// Build the RoleBinding granting the namespace's group the configured ClusterRole
pub fn build_role_binding(namespace: &str, settings: &BindingSettings) -> RoleBinding {
    let name = role_binding_name(&settings.prefix, namespace);

    RoleBinding {
        metadata: ObjectMeta {
            name: Some(name.clone()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        subjects: Some(vec![Subject {
            kind: binding::SUBJECT_KIND.to_string(),
            api_group: Some(RBAC_API_GROUP.to_string()),
            name,
            namespace: None,
        }]),
        role_ref: RoleRef {
            api_group: RBAC_API_GROUP.to_string(),
            kind: binding::ROLE_REF_KIND.to_string(),
            name: settings.cluster_role.clone(),
        },
    }
}

/// Create the RoleBinding in the namespace. A single attempt, errors go to the caller.
#[instrument(skip(client, settings))]
pub async fn create_role_binding(
    client: &Client,
    namespace: &str,
    settings: &BindingSettings,
) -> Result<RoleBinding> {
    let bindings: Api<RoleBinding> = Api::namespaced(client.clone(), namespace);
    let role_binding = build_role_binding(namespace, settings);

    debug!("Creating RoleBinding {}/{}", namespace, role_binding.name_any());

    Ok(bindings
        .create(&PostParams::default(), &role_binding)
        .await?)
}
