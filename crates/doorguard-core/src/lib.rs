//! # Doorguard Core Library
//!
//! This library supervises a timed door: a strict two-state lock/unlock
//! machine whose "open" state is audited by a one-shot timeout scheduler.
//! A caller unlocks the door and registers an adapter with the scheduler;
//! if the door is still open when the deadline elapses, the audit reports
//! a violation on the scheduler's own task.
//!
//! ## Architecture
//!
//! - **Timed Door**: A mutex-guarded two-state machine that rejects
//!   double-unlock and double-lock at the call site
//! - **Timer**: A one-shot scheduler; each registration fires exactly once,
//!   on its own tokio task, no earlier than the requested duration
//! - **Timer Client**: The capability trait the scheduler dispatches
//!   through without knowing the concrete implementer
//! - **Adapter**: Binds one door to the client capability and delegates
//!   the audit
//!
//! ## Key Components
//!
//! - [`TimedDoor`]: Door state machine with deadline audit
//! - [`Timer`]: One-shot notification scheduler
//! - [`TimerClient`]: Trait for timeout notification receivers
//! - [`DoorTimerAdapter`]: `TimerClient` implementation for a door

pub mod door;
pub mod timer;
pub mod events;
pub mod error;

pub use door::{DoorTimerAdapter, TimedDoor};
pub use timer::{Timer, TimerClient};
pub use events::Event;
pub use error::{CoreError, Result, StateError};
