use super::{
    event::SchedEvent,
    observer::Observer,
    state::{SimState, Ticks},
};
use crate::{
    energy,
    error::WorkloadError,
    sim::process::{Completed, Process},
};

pub struct Sim {
    pub state: SimState,
    quantum: Ticks,
    observer: Observer,
}

// Terminal state of a finished run, handed to the aggregation layer.
#[derive(Debug)]
pub struct Outcome {
    pub completed: Vec<Completed>,
    pub energy_consumed: f64,
    pub idle_ticks: Ticks,
    pub total_ticks: Ticks,
}

impl Sim {
    pub fn new(processes: Vec<Process>, quantum: Ticks) -> Result<Self, WorkloadError> {
        if quantum == 0 {
            return Err(WorkloadError::ZeroQuantum);
        }
        if let Some(p) = processes.iter().find(|p| p.burst_time == 0) {
            return Err(WorkloadError::ZeroBurst { pid: p.pid });
        }

        Ok(Self {
            state: SimState::new(processes),
            quantum,
            observer: Observer::new(),
        })
    }

    // One scheduling step: admission, dispatch, execute-or-idle, then the
    // clock advances by exactly 1 regardless of the slice length.
    pub fn step(&mut self) -> Vec<SchedEvent> {
        let mut events = Vec::new();
        self.admit_arrivals(&mut events);
        self.dispatch(&mut events);
        self.execute_or_idle(&mut events);
        self.state.now += 1;
        self.observer.observe(&self.state);
        events
    }

    // Admission is by equality on `now`; the step-by-1 clock guarantees every
    // arrival time is swept. Ties keep input order.
    fn admit_arrivals(&mut self, events: &mut Vec<SchedEvent>) {
        let now = self.state.now;
        for idx in 0..self.state.entries.len() {
            if self.state.entries[idx].process.arrival_time == now
                && !self.state.admitted.contains(&idx)
            {
                self.state.admit(idx);
                events.push(SchedEvent::Admitted {
                    pid: self.state.entry(idx).process.pid,
                });
            }
        }
    }

    fn dispatch(&mut self, events: &mut Vec<SchedEvent>) {
        if self.state.running.is_some() {
            return;
        }
        if let Some(idx) = self.state.ready.pop_front() {
            self.state.set_running(idx, self.quantum);
            events.push(SchedEvent::Dispatched {
                pid: self.state.entry(idx).process.pid,
            });
        }
    }

    fn execute_or_idle(&mut self, events: &mut Vec<SchedEvent>) {
        let Some(idx) = self.state.running else {
            self.state.idle_ticks += 1;
            self.state.energy_consumed += energy::cost(1, false);
            events.push(SchedEvent::CpuIdle);
            return;
        };

        // In its own block to keep the entry borrow local
        let (pid, slice) = {
            let entry = &mut self.state.entries[idx];
            let slice = self.state.quantum_left.min(entry.remaining);
            entry.remaining -= slice;
            (entry.process.pid, slice)
        };
        self.state.quantum_left -= slice;
        self.state.energy_consumed += energy::cost(slice, true);
        events.push(SchedEvent::Ran { pid, slice });

        if self.state.entries[idx].remaining == 0 {
            self.state.complete_running(slice);
            events.push(SchedEvent::Completed { pid });
        } else if self.state.quantum_left == 0 {
            self.state.preempt_running();
            events.push(SchedEvent::Preempted { pid });
        }
    }

    pub fn all_completed(&self) -> bool {
        self.state.all_completed()
    }

    pub fn run_to_completion(&mut self) {
        while !self.all_completed() {
            self.step();
        }
    }

    pub fn into_outcome(self) -> Outcome {
        debug_assert!(self.state.all_completed(), "outcome taken mid-run");
        Outcome {
            total_ticks: self.state.now,
            energy_consumed: self.state.energy_consumed,
            idle_ticks: self.state.idle_ticks,
            completed: self.state.completed,
        }
    }
}

pub fn run_workload(processes: Vec<Process>, quantum: Ticks) -> Result<Outcome, WorkloadError> {
    let mut sim = Sim::new(processes, quantum)?;
    sim.run_to_completion();
    Ok(sim.into_outcome())
}
