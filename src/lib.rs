pub mod core;
pub mod energy;
pub mod error;
pub mod metrics;
pub mod sim;

pub use crate::core::{Outcome, SchedEvent, Sim, run_workload};
pub use error::WorkloadError;
pub use metrics::{EnergyBreakdown, Report};
pub use sim::{Completed, Pid, Process, random_processes};
