// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from a local kubeconfig file or in-cluster credentials

use crate::config::Config;
use crate::error::{Result, RolebinderError};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config as KConfig,
};
use std::path::Path;
use tracing::{info, instrument};

/// Create a Kubernetes client for the cluster the controller manages
#[instrument(skip(config), fields(outside_cluster = config.run_outside_cluster))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = if config.run_outside_cluster {
        let path = config.kubeconfig_path()?;
        info!("Loading kubeconfig from {}", path.display());
        load_kubeconfig(&path).await?
    } else {
        info!("Using in-cluster service account credentials");
        KConfig::incluster().map_err(|e| {
            RolebinderError::KubeconfigError(format!("Failed to load in-cluster config: {}", e))
        })?
    };

    Client::try_from(client_config)
        .map_err(|e| RolebinderError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Read a kubeconfig file and resolve its current context
async fn load_kubeconfig(path: &Path) -> Result<KConfig> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        RolebinderError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    config_from_kubeconfig(&contents).await
}

/// Build a client config from kubeconfig YAML using its current context
async fn config_from_kubeconfig(kubeconfig: &str) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| RolebinderError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
        .await
        .map_err(|e| RolebinderError::KubeconfigError(format!("Failed to create config: {}", e)))
}
