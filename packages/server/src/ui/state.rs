//! Server state.

use std::sync::Arc;

use crate::domain::{ChatStore, Clock, RepositoryError};

/// A store that has answered its readiness probe.
///
/// `AppState` can only be built from a `ReadyStore`, so no request is served
/// before storage is usable.
#[derive(Clone)]
pub struct ReadyStore(Arc<dyn ChatStore>);

impl ReadyStore {
    /// Probe `store` and wrap it once it is ready.
    pub async fn connect(store: Arc<dyn ChatStore>) -> Result<Self, RepositoryError> {
        store.ping().await?;
        Ok(Self(store))
    }

    pub fn store(&self) -> Arc<dyn ChatStore> {
        self.0.clone()
    }
}

/// Shared application state
pub struct AppState {
    /// Store（データアクセス層の抽象化）
    pub store: Arc<dyn ChatStore>,
    /// Time source for heartbeats and message times
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: ReadyStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: store.store(),
            clock,
        }
    }
}
