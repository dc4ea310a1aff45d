//! Core error types for doorguard-core.
//!
//! Three failure kinds exist: state-machine misuse (caught synchronously
//! at the lock/unlock call site), a supervision violation raised by the
//! audit, and duplicate timer registration. None are recovered internally;
//! all surface to the caller.

use thiserror::Error;

/// Core error type for doorguard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State-machine misuse: lock/unlock called with the door already in
    /// the target state.
    #[error("Door state error: {0}")]
    State(#[from] StateError),

    /// The door was still open when its supervision deadline was audited.
    #[error("door left open past its {timeout_secs}s deadline")]
    TimeoutViolation { timeout_secs: u64 },

    /// A registration for this exact duration is already pending.
    #[error("a registration for {duration_secs}s is already pending")]
    DuplicateRegistration { duration_secs: u64 },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// State-machine misuse errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// `unlock` called while the door was already open
    #[error("door is already unlocked")]
    AlreadyUnlocked,

    /// `lock` called while the door was already closed
    #[error("door is already locked")]
    AlreadyLocked,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
