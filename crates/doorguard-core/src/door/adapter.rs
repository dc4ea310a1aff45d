//! Adapter binding one door to the scheduler's client capability.

use std::sync::Arc;

use crate::door::TimedDoor;
use crate::error::Result;
use crate::timer::TimerClient;

/// Implements [`TimerClient`] for a single supervised door.
///
/// Holds nothing beyond the door handle. When the timer fires it delegates
/// to the door's audit and passes the outcome through unchanged, so the
/// scheduler never needs to know what kind of resource it is supervising.
pub struct DoorTimerAdapter {
    door: Arc<TimedDoor>,
}

impl DoorTimerAdapter {
    pub fn new(door: Arc<TimedDoor>) -> Self {
        Self { door }
    }
}

impl TimerClient for DoorTimerAdapter {
    fn on_timeout(&self) -> Result<()> {
        self.door.assert_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn notification_mirrors_door_audit() {
        let door = Arc::new(TimedDoor::new(5));
        let adapter = DoorTimerAdapter::new(Arc::clone(&door));

        assert!(adapter.on_timeout().is_ok());

        door.unlock().unwrap();
        assert!(matches!(
            adapter.on_timeout(),
            Err(CoreError::TimeoutViolation { timeout_secs: 5 })
        ));

        door.lock().unwrap();
        assert!(adapter.on_timeout().is_ok());
    }

    #[test]
    fn adapter_dispatches_through_trait_object() {
        let door = Arc::new(TimedDoor::new(5));
        let client: Arc<dyn TimerClient> = Arc::new(DoorTimerAdapter::new(Arc::clone(&door)));

        assert!(client.on_timeout().is_ok());
        door.unlock().unwrap();
        assert!(client.on_timeout().is_err());
    }
}
