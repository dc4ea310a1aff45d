mod adapter;
mod timed_door;

pub use adapter::DoorTimerAdapter;
pub use timed_door::TimedDoor;
