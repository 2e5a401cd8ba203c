// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rolebinder::config::Config;
use rolebinder::controllers::NamespaceController;
use rolebinder::kubernetes::create_client;
use rolebinder::shutdown::ShutdownSignal;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, logging to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .init();

    let config = Config::parse();
    info!(
        "Starting rolebinder: run_outside_cluster={}, binding_prefix={}, cluster_role={}",
        config.run_outside_cluster, config.binding_prefix, config.cluster_role
    );

    // Install signal handlers before any cluster work
    let mut shutdown_signal = ShutdownSignal::register()?;

    // Credential errors are fatal
    let client = tokio::select! {
        client = create_client(&config) => client?,
        res = shutdown_signal.recv() => {
            res?;
            info!("Shutting down...");
            return Ok(());
        }
    };
    info!("Connected to Kubernetes cluster");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let controller = NamespaceController::new(client, config.binding_settings());
    let watch_task = tokio::spawn(controller.run(shutdown_rx));

    // Blocks until a termination signal arrives
    shutdown_signal.recv().await?;
    info!("Shutting down...");

    // The watch task may already have exited
    let _ = shutdown_tx.send(true);
    watch_task.await??;

    Ok(())
}
