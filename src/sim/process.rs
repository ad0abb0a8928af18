use crate::core::state::Ticks;

pub type Pid = u64;

// Immutable workload descriptor. `priority` is carried through to the
// completed record for input compatibility but never consulted for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completed {
    pub process: Process,
    pub turnaround_time: i64,
    pub waiting_time: i64,
}

impl Completed {
    // Waiting time can go negative when quantum > 1: the clock advances one
    // step per slice regardless of slice length.
    pub fn new(process: Process, turnaround_time: i64) -> Self {
        Self {
            process,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_fixes_waiting_time() {
        let process = Process {
            pid: 4,
            arrival_time: 1,
            burst_time: 3,
            priority: 2,
        };
        let done = Completed::new(process, 7);
        assert_eq!(done.waiting_time, 4);
        assert_eq!(done.process, process);
    }
}
