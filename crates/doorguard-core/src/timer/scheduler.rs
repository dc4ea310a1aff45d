//! One-shot timeout scheduler.
//!
//! `register` does its bookkeeping and returns immediately; the
//! notification fires later on a spawned tokio task, no earlier than the
//! requested duration. No ordering is guaranteed between independent
//! registrations, and there is no cancellation: an accepted registration
//! always fires exactly once.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CoreError, Result};
use crate::timer::TimerClient;

/// One-shot notification scheduler.
///
/// Pending registrations are keyed by their raw duration value: a second
/// registration for an identical duration is rejected while the first is
/// still pending, and becomes legal again once the first has fired. The
/// key is the duration alone, not the client, so two unrelated clients
/// sharing a duration collide. This catches accidental re-registration at
/// a call site; it is a known limitation for callers that legitimately
/// want to share a duration across clients.
#[derive(Debug, Default)]
pub struct Timer {
    pending: Arc<Mutex<HashSet<u64>>>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registrations accepted and not yet fired.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Schedule `client` to be notified once, no earlier than
    /// `duration_secs` from now, on a task independent of the caller.
    ///
    /// Returns without waiting for the duration to elapse. Must be called
    /// from within a tokio runtime.
    ///
    /// Fails with [`CoreError::DuplicateRegistration`] if a registration
    /// for the identical duration is still pending.
    pub fn register(&self, duration_secs: u64, client: Arc<dyn TimerClient>) -> Result<()> {
        {
            let mut pending = self.pending.lock().unwrap();
            if !pending.insert(duration_secs) {
                return Err(CoreError::DuplicateRegistration { duration_secs });
            }
        }

        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(duration_secs)).await;
            // The duration becomes registrable again as soon as the
            // deadline has elapsed, before the client runs.
            pending.lock().unwrap().remove(&duration_secs);
            if let Err(err) = client.on_timeout() {
                tracing::warn!(duration_secs, %err, "timeout notification reported a violation");
            }
        });
        Ok(())
    }
}
