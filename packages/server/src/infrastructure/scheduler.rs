//! Periodic inactivity sweep.
//!
//! The scheduler owns the timer; the sweep itself lives in
//! `SweepInactiveUseCase` and only sees the `now` it is given.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::{domain::Clock, usecase::SweepInactiveUseCase};

/// Default period between two sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);

pub struct SweepScheduler {
    usecase: SweepInactiveUseCase,
    clock: Arc<dyn Clock>,
    period: Duration,
}

impl SweepScheduler {
    pub fn new(usecase: SweepInactiveUseCase, clock: Arc<dyn Clock>, period: Duration) -> Self {
        Self {
            usecase,
            clock,
            period,
        }
    }

    /// Run one sweep at the clock's current time.
    ///
    /// Storage failures are logged; the next tick retries.
    pub async fn tick(&self) {
        let now = self.clock.now();
        match self.usecase.execute(now).await {
            Ok(report) if !report.is_empty() => {
                tracing::debug!(?report, "Sweep finished");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Inactivity sweep failed: {}", e);
            }
        }
    }

    /// Spawn the sweep loop.
    ///
    /// The first sweep happens one period after start. A sweep always runs
    /// to completion; `shutdown` is only observed while waiting for the next
    /// tick, so sweeps never overlap and are never cut short.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            tracing::info!(period_secs = self.period.as_secs_f64(), "Sweep scheduler started");
            loop {
                tokio::select! {
                    _ = interval.tick() => self.tick().await,
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }
            tracing::info!("Sweep scheduler stopped");
        })
    }
}
