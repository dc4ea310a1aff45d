//! Timed door state machine.
//!
//! A strict two-state machine {closed, open} with no self-transitions:
//! double-unlock and double-lock are rejected at the call site instead of
//! silently tolerated.
//!
//! ## State Transitions
//!
//! ```text
//! closed -(unlock)-> open -(lock)-> closed
//! ```
//!
//! The audit (`assert_closed`) is deliberately separate from `lock`/`unlock`
//! so that the "open past deadline is a violation" policy is not entangled
//! with the ordinary mutation API. Any holder of the door may audit it at
//! an arbitrary instant.

use std::sync::Mutex;

use chrono::Utc;

use crate::error::{CoreError, Result, StateError};
use crate::events::Event;

/// A door whose open state is supervised against a fixed deadline.
///
/// `lock`/`unlock` mutate the state from the caller's context while a
/// scheduled audit may read it concurrently from the timer's task, so the
/// flag lives behind a mutex. All methods take `&self`; share the door
/// via `Arc`.
pub struct TimedDoor {
    open: Mutex<bool>,
    /// Supervision deadline in seconds, fixed at construction.
    timeout_secs: u64,
}

impl TimedDoor {
    /// Create a locked door with the given supervision deadline in seconds.
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            open: Mutex::new(false),
            timeout_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_opened(&self) -> bool {
        *self.open.lock().unwrap()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Build a point-in-time status event.
    pub fn snapshot(&self) -> Event {
        Event::StatusSnapshot {
            open: self.is_opened(),
            timeout_secs: self.timeout_secs,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Open the door.
    ///
    /// Fails with [`StateError::AlreadyUnlocked`] if the door is already
    /// open.
    pub fn unlock(&self) -> Result<Event> {
        let mut open = self.open.lock().unwrap();
        if *open {
            return Err(StateError::AlreadyUnlocked.into());
        }
        *open = true;
        Ok(Event::DoorUnlocked {
            timeout_secs: self.timeout_secs,
            at: Utc::now(),
        })
    }

    /// Close the door.
    ///
    /// Fails with [`StateError::AlreadyLocked`] if the door is already
    /// closed.
    pub fn lock(&self) -> Result<Event> {
        let mut open = self.open.lock().unwrap();
        if !*open {
            return Err(StateError::AlreadyLocked.into());
        }
        *open = false;
        Ok(Event::DoorLocked { at: Utc::now() })
    }

    /// Audit the door: an open door is a supervision violation, a closed
    /// door passes with no effect.
    ///
    /// Intended to be invoked by a timeout notification handler, but valid
    /// at any instant.
    pub fn assert_closed(&self) -> Result<()> {
        if self.is_opened() {
            return Err(CoreError::TimeoutViolation {
                timeout_secs: self.timeout_secs,
            });
        }
        Ok(())
    }
}
