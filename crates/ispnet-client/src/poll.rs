//! Unread-notification polling task.
//!
//! The poll loop is an explicit task cancelled through a
//! [`CancellationToken`] tied to the session lifetime; it also stops on
//! its own when the backend reports the session expired.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::client::{PortalClient, PortalError};

/// Default poll cadence.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Drive the poll loop: fetch the unread count every `interval`, hand it
/// to `on_count`, stop on cancellation or when the backend reports the
/// session expired. Transient failures are logged and polling continues.
pub async fn run_unread_poller<F, Fut, C>(
    mut fetch: F,
    interval: Duration,
    cancel: CancellationToken,
    mut on_count: C,
) where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<u64, PortalError>>,
    C: FnMut(u64),
{
    let mut timer = tokio::time::interval(interval);
    timer.tick().await; // Skip first immediate tick

    loop {
        tokio::select! {
            _ = timer.tick() => {
                match fetch().await {
                    Ok(count) => on_count(count),
                    Err(PortalError::Unauthorized) => {
                        info!("Session expired; stopping notification poll");
                        return;
                    }
                    Err(e) => {
                        warn!(error = %e, "Unread count poll failed");
                    }
                }
            }
            () = cancel.cancelled() => {
                info!("Notification poll cancelled");
                return;
            }
        }
    }
}

/// Spawn the unread poller against a portal client.
pub fn spawn_unread_poller<C>(
    client: PortalClient,
    interval: Duration,
    cancel: CancellationToken,
    on_count: C,
) -> tokio::task::JoinHandle<()>
where
    C: FnMut(u64) + Send + 'static,
{
    tokio::spawn(async move {
        let fetch = || {
            let client = client.clone();
            async move { client.unread_count().await }
        };
        run_unread_poller(fetch, interval, cancel, on_count).await;
    })
}
