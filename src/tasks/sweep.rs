//! Expiration Sweep Task
//!
//! Background task that periodically removes cache entries older than the
//! configured interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Sweep Handle ==
/// Controls a running sweep task.
///
/// Dropping the handle closes the stop channel, which also ends the task.
#[derive(Debug)]
pub struct SweepHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    // == Stop ==
    /// Asks the sweep to exit once its current tick, if any, has finished.
    ///
    /// Safe to call more than once. Stored entries are left untouched.
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    /// Returns true until the sweep task has exited.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

/// Spawns the sweep task for `store`.
///
/// Every `interval`, starting one interval from now, the task computes
/// `cutoff = now - interval` and removes every entry created strictly before
/// it. The write lock is held for one scan pass and released until the next
/// tick.
///
/// The task exits when the returned handle is stopped or dropped, or when the
/// optional `shutdown` signal turns `true` or its sender goes away.
///
/// # Panics
/// Panics if called outside a Tokio runtime or if `interval` is zero.
pub fn start_sweep(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    shutdown: Option<watch::Receiver<bool>>,
) -> SweepHandle {
    let (stop_tx, stop_rx) = watch::channel(false);
    let task = tokio::spawn(sweep_loop(store, interval, stop_rx, shutdown));

    SweepHandle { stop_tx, task }
}

async fn sweep_loop(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    mut stop_rx: watch::Receiver<bool>,
    mut shutdown: Option<watch::Receiver<bool>>,
) {
    debug!(interval_ms = interval.as_millis() as u64, "Starting cache sweep task");

    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = signalled(&mut stop_rx) => {
                debug!("Cache sweep stopped");
                break;
            }
            _ = parent_signalled(shutdown.as_mut()) => {
                debug!("Cache sweep stopped by shutdown signal");
                break;
            }
            _ = ticker.tick() => {
                let removed = sweep_expired(&store, interval).await;

                if removed > 0 {
                    info!("Cache sweep: removed {} expired entries", removed);
                } else {
                    debug!("Cache sweep: no expired entries found");
                }
            }
        }
    }
}

/// Runs one sweep pass and returns the number of entries removed.
async fn sweep_expired(store: &RwLock<CacheStore>, interval: Duration) -> usize {
    // A cutoff before the clock's origin means nothing can be old enough yet
    let Some(cutoff) = Instant::now().checked_sub(interval) else {
        return 0;
    };

    store.write().await.remove_older_than(cutoff)
}

/// Resolves once the flag is set or the sender is gone.
async fn signalled(rx: &mut watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

async fn parent_signalled(rx: Option<&mut watch::Receiver<bool>>) {
    match rx {
        Some(rx) => signalled(rx).await,
        None => std::future::pending().await,
    }
}
