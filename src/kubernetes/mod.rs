// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction from local or in-cluster credentials.

pub mod client;

pub use client::create_client;
