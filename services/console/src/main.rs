//! MROSC console HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, permission tables, the record store and the HTTP
//! router, then serves the API and the metrics endpoint.
use anyhow::Context;
use console::app::{AppState, PermissionsSource, build_router};
use console::config::ConsoleConfig;
use console::observability;
use console::store::memory::{InMemoryStore, SeedData};
use mrosc_authz::{AccessResolver, PermissionTable};
use mrosc_status::Normalizer;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env_or_yaml().context("console config")?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: ConsoleConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let prometheus = observability::init_observability("mrosc-console");
    let state = build_state(config.clone())?;
    tracing::info!(
        instance = %state.instance_id,
        permissions = %state.permissions_source,
        store = state.store.backend_name(),
        "console state ready"
    );
    let metrics_server = tokio::spawn(observability::serve_metrics(
        prometheus,
        config.metrics_bind,
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("bind console listener: {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "console listening");
    let served = axum::serve(listener, build_router(state).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await;

    metrics_server.abort();
    served.context("console server")
}

fn build_state(config: ConsoleConfig) -> anyhow::Result<AppState> {
    let (table, permissions_source) = match &config.permissions_file {
        Some(path) => {
            let table = PermissionTable::from_yaml_file(path)
                .with_context(|| format!("load permission tables: {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded permission tables");
            (table, PermissionsSource::File)
        }
        None => (PermissionTable::builtin(), PermissionsSource::Builtin),
    };

    let store = match &config.seed_file {
        Some(path) => {
            let seed = SeedData::from_file(path)
                .with_context(|| format!("load seed file: {}", path.display()))?;
            InMemoryStore::with_seed(seed)
        }
        None => InMemoryStore::new(),
    };

    Ok(AppState {
        instance_id: config.instance_id,
        api_version: "v1".to_string(),
        permissions_source,
        resolver: Arc::new(AccessResolver::new(table)),
        normalizer: Arc::new(Normalizer::default()),
        store: Arc::new(store),
    })
}
