// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{binding, kubeconfig};
use crate::error::{Result, RolebinderError};
use crate::rbac::BindingSettings;
use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Controller configuration loaded from command line flags
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rolebinder",
    version,
    about = "Creates a RoleBinding in every new namespace"
)]
pub struct Config {
    /// Set this flag when running outside of the cluster.
    #[arg(long)]
    pub run_outside_cluster: bool,

    /// Kubeconfig used with --run-outside-cluster (defaults to $HOME/.kube/config)
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Prefix for the binding name and the bound group
    #[arg(long, default_value = binding::DEFAULT_PREFIX)]
    pub binding_prefix: String,

    /// ClusterRole granted to the group in each namespace
    #[arg(long, default_value = binding::DEFAULT_CLUSTER_ROLE)]
    pub cluster_role: String,
}

impl Config {
    /// Location of the local kubeconfig file
    pub fn kubeconfig_path(&self) -> Result<PathBuf> {
        self.kubeconfig_path_in(env::var_os(kubeconfig::HOME_ENV))
    }

    /// Location of the local kubeconfig file for the given home directory
    fn kubeconfig_path_in(&self, home: Option<OsString>) -> Result<PathBuf> {
        if let Some(path) = &self.kubeconfig {
            return Ok(path.clone());
        }

        let home = home.ok_or_else(|| {
            RolebinderError::ConfigError(format!(
                "{} environment variable not set",
                kubeconfig::HOME_ENV
            ))
        })?;

        Ok(PathBuf::from(home).join(kubeconfig::DIR).join(kubeconfig::FILE))
    }

    pub fn binding_settings(&self) -> BindingSettings {
        BindingSettings {
            prefix: self.binding_prefix.clone(),
            cluster_role: self.cluster_role.clone(),
        }
    }
}
