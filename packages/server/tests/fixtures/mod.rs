//! Test server fixture.
//!
//! Serves the real router on an ephemeral port inside the test runtime.

use std::sync::Arc;

use lounge_server::{
    domain::{ChatStore, Clock, ManualClock, Timestamp},
    infrastructure::repository::InMemoryChatStore,
    ui::{AppState, ReadyStore, build_router},
};
use tokio::{net::TcpListener, task::JoinHandle};

pub const T0: i64 = 1_700_000_000_000;

pub struct TestServer {
    addr: std::net::SocketAddr,
    pub store: Arc<InMemoryChatStore>,
    pub clock: Arc<ManualClock>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let store = Arc::new(InMemoryChatStore::new());
        let clock = Arc::new(ManualClock::new(Timestamp::new(T0)));

        let dyn_store: Arc<dyn ChatStore> = store.clone();
        let dyn_clock: Arc<dyn Clock> = clock.clone();
        let ready = ReadyStore::connect(dyn_store)
            .await
            .expect("in-memory store is always ready");
        let state = Arc::new(AppState::new(ready, dyn_clock));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, build_router(state))
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            store,
            clock,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
