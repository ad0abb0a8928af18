use thiserror::Error;

use crate::sim::process::Pid;

// Detected at the `Sim::new` boundary; the engine has no error path mid-run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("process {pid} has zero burst time")]
    ZeroBurst { pid: Pid },
    #[error("quantum must be positive")]
    ZeroQuantum,
}
