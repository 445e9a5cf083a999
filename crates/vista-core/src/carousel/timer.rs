use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// One autoplay period elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTick;

/// Owned handle to the free-running autoplay interval
///
/// The interval keeps its own cadence: nothing the user does on the carousel
/// moves the next tick. Dropping the handle (or calling `cancel`) stops the
/// task, so no tick can reach a page view that has been torn down.
#[derive(Debug)]
pub struct AutoplayTimer {
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl AutoplayTimer {
    /// Spawn the interval on the current tokio runtime
    ///
    /// The first tick arrives one full `period` after spawning.
    pub fn spawn(period: Duration, tx: mpsc::UnboundedSender<AutoplayTick>) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // A stalled runtime advances one slide, never a burst of them
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Skip the first tick (fires immediately)
            interval.tick().await;

            loop {
                tokio::select! {
                    result = shutdown_rx.changed() => {
                        if result.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        if tx.send(AutoplayTick).is_err() {
                            debug!("Autoplay receiver dropped, stopping timer");
                            break;
                        }
                    }
                }
            }
        });

        info!("Hero autoplay started: every {}ms", period.as_millis());

        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    /// Whether the timer task is still alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the timer; consuming `self` makes a second release impossible
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.shutdown.send(true);
            handle.abort();
            info!("Hero autoplay stopped");
        }
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.release();
    }
}
