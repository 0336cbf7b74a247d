pub mod clock;
pub mod poller;
mod task;

pub use clock::{CountdownClock, SystemClock, TimeSource};
pub use poller::{fetch, TokenPoller};
pub use task::PeriodicTask;
