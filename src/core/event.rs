use crate::core::state::Ticks;
use crate::sim::process::Pid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    Admitted { pid: Pid },
    Dispatched { pid: Pid },
    Ran { pid: Pid, slice: Ticks },
    Preempted { pid: Pid },
    Completed { pid: Pid },
    // No process runnable this step
    CpuIdle,
}
