mod client;
mod scheduler;

pub use client::TimerClient;
pub use scheduler::Timer;
