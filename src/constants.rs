// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// RBAC API group used for both the subject and the role reference
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// Defaults for the binding created in every new namespace
pub mod binding {
    /// Prefix shared by the binding name and the bound group
    pub const DEFAULT_PREFIX: &str = "ad-kubernetes";
    /// ClusterRole granted to the group
    pub const DEFAULT_CLUSTER_ROLE: &str = "edit";
    pub const SUBJECT_KIND: &str = "Group";
    pub const ROLE_REF_KIND: &str = "ClusterRole";
}

/// Local kubeconfig location, relative to the home directory
pub mod kubeconfig {
    pub const HOME_ENV: &str = "HOME";
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
}
