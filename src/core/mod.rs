pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{Outcome, Sim, run_workload};
pub use event::SchedEvent;
pub use state::{ProcEntry, ProcIdx, SimState, Ticks};
