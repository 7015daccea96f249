use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::api::PortalClient;
use crate::error::Result;
use crate::models::ArenaRealmLadders;

/// Arena ladders. At most one fetch runs at a time; a fetch requested while
/// another is in flight is skipped rather than queued.
#[derive(Debug, Default)]
pub struct ArenaView {
    in_flight: AtomicBool,
    ladders: RwLock<Vec<ArenaRealmLadders>>,
}

/// Clears the in-flight flag however the fetch ends
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ArenaView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn ladders(&self) -> Vec<ArenaRealmLadders> {
        self.ladders
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns `Ok(false)` when skipped because a fetch was already running
    pub async fn fetch(&self, client: &PortalClient) -> Result<bool> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Arena fetch already in flight, skipping");
            return Ok(false);
        }
        let _guard = InFlight(&self.in_flight);

        let ladders = client.arena_top().await?;
        *self.ladders.write().unwrap_or_else(|e| e.into_inner()) = ladders;
        Ok(true)
    }
}
