use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::models::analytics::{AnalyticsLoad, AnalyticsSnapshot};
use crate::sheets::client::SheetsClient;
use crate::site::lifecycle::MountGuard;

pub type SnapshotReceiver = watch::Receiver<Option<AnalyticsSnapshot>>;

/// Polls the spreadsheet right away and then every `poll_interval_secs`
/// until `cancel` fires.
pub fn start_monitor(client: SheetsClient, cancel: CancellationToken) -> SnapshotReceiver {
    let period = Duration::from_secs(client.config().poll_interval_secs.max(1));
    start_monitor_with(period, cancel, move || {
        let client = client.clone();
        async move { client.load().await }
    })
}

/// Every tick spawns its own fetch. Fetches may overlap and are never
/// cancelled; whichever completes last owns the snapshot. Completions after
/// cancellation are discarded.
pub fn start_monitor_with<F, Fut>(period: Duration, cancel: CancellationToken, fetch: F) -> SnapshotReceiver
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = AnalyticsLoad> + Send + 'static,
{
    let (tx, rx) = watch::channel(None);
    let guard = MountGuard::new();
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        let mut cycle = 0u64;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Analytics monitor stopped after {} cycles", cycle);
                    guard.retire();
                    break;
                }
                _ = interval.tick() => {
                    cycle += 1;
                    tracing::debug!("Analytics fetch cycle {}", cycle);
                    let pending = fetch();
                    let tx = tx.clone();
                    let live = guard.clone();
                    let this_cycle = cycle;
                    tokio::spawn(async move {
                        let load = pending.await;
                        let delivered = live.deliver(load, |load| {
                            let snapshot = AnalyticsSnapshot::new(load, this_cycle);
                            tracing::info!(
                                "Cycle {}: {} points ({}), {} beneficiaries",
                                this_cycle,
                                snapshot.load.points.len(),
                                if snapshot.load.is_degraded() { "fallback" } else { "live" },
                                snapshot.stats.total_beneficiaries
                            );
                            tx.send_replace(Some(snapshot));
                        });
                        if !delivered {
                            tracing::debug!("Dropping cycle {} result after shutdown", this_cycle);
                        }
                    });
                }
            }
        }
    });
    rx
}
