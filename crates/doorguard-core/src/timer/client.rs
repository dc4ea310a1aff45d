//! Timeout notification capability.

use crate::error::Result;

/// "Can receive a timeout notification."
///
/// The scheduler dispatches through this trait without knowing the
/// concrete implementer. The returned `Result` surfaces on the scheduler's
/// task: an `Err` from a fired client is reported there, never swallowed.
pub trait TimerClient: Send + Sync {
    /// Called exactly once per registration, on the scheduler's task,
    /// when the registered duration has elapsed.
    fn on_timeout(&self) -> Result<()>;
}
