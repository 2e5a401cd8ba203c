// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace watch and the RoleBinding callback.

pub mod namespace;
pub mod tracker;

pub use namespace::NamespaceController;
pub use tracker::NamespaceTracker;
