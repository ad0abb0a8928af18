pub mod process;
pub mod workload;

pub use process::{Completed, Pid, Process};
pub use workload::random_processes;
