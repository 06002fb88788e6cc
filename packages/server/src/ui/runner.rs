//! Server bootstrap.

use std::sync::Arc;

use tokio::{net::TcpListener, sync::watch};

use crate::{
    config::ServerConfig,
    domain::{ChatStore, Clock, InactivityPolicy, SystemClock},
    error::ServerError,
    infrastructure::{repository::InMemoryChatStore, scheduler::SweepScheduler},
    usecase::SweepInactiveUseCase,
};

use super::{
    router::build_router,
    signal::shutdown_signal,
    state::{AppState, ReadyStore},
};

/// Run the server until a shutdown signal arrives.
///
/// Startup order: connect the store, start the sweep scheduler, then accept
/// requests. On shutdown the HTTP server drains first and the scheduler
/// stops after its current sweep.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let store: Arc<dyn ChatStore> = Arc::new(InMemoryChatStore::new());
    let store = ReadyStore::connect(store).await?;
    tracing::info!("Store connected");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = Arc::new(AppState::new(store.clone(), clock.clone()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweep = SweepInactiveUseCase::new(
        store.store(),
        InactivityPolicy::new(config.inactivity_threshold),
    );
    let scheduler = SweepScheduler::new(sweep, clock, config.sweep_interval).spawn(shutdown_rx);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(
        inactivity_threshold_secs = config.inactivity_threshold.as_secs(),
        "Server listening on {}",
        addr
    );

    let served = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if shutdown_tx.send(true).is_err() {
        tracing::warn!("Sweep scheduler already stopped");
    }
    if let Err(e) = scheduler.await {
        tracing::error!("Sweep scheduler task failed: {}", e);
    }

    served.map_err(ServerError::Serve)
}
