use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::sim::process::{Completed, Process};

// Index into the run-table Vec
pub type ProcIdx = usize;
pub type Ticks = u64;

#[derive(Debug)]
pub struct ProcEntry {
    pub process: Process,
    pub remaining: Ticks,
}

#[derive(Debug)]
pub struct SimState {
    pub now: Ticks,
    pub entries: Vec<ProcEntry>,
    pub ready: VecDeque<ProcIdx>,
    pub running: Option<ProcIdx>,
    pub quantum_left: Ticks,
    pub admitted: FxHashSet<ProcIdx>,
    pub completed: Vec<Completed>,
    pub energy_consumed: f64,
    pub idle_ticks: Ticks,
}

impl SimState {
    pub fn new(processes: Vec<Process>) -> Self {
        let entries = processes
            .into_iter()
            .map(|process| ProcEntry {
                remaining: process.burst_time,
                process,
            })
            .collect();

        Self {
            now: 0,
            entries,
            ready: VecDeque::new(),
            running: None,
            quantum_left: 0,
            admitted: FxHashSet::default(),
            completed: Vec::new(),
            energy_consumed: 0.0,
            idle_ticks: 0,
        }
    }

    pub fn admit(&mut self, idx: ProcIdx) {
        debug_assert!(
            !self.admitted.contains(&idx),
            "process {idx} admitted twice"
        );
        self.admitted.insert(idx);
        self.ready.push_back(idx);
    }

    pub fn set_running(&mut self, idx: ProcIdx, quantum: Ticks) {
        debug_assert!(
            self.running.is_none(),
            "dispatch with a process already running"
        );
        debug_assert!(
            self.entries[idx].remaining > 0,
            "dispatched process {idx} has no work left"
        );
        self.running = Some(idx);
        self.quantum_left = quantum;
    }

    pub fn preempt_running(&mut self) -> ProcIdx {
        let idx = self
            .running
            .take()
            .expect("preemption with no running process");
        debug_assert!(
            self.entries[idx].remaining > 0,
            "preempted process {idx} has no work left"
        );
        self.ready.push_back(idx);
        idx
    }

    // `slice` is the execution the process received this step; the clock has
    // not advanced past it yet.
    pub fn complete_running(&mut self, slice: Ticks) -> ProcIdx {
        let idx = self
            .running
            .take()
            .expect("completion with no running process");
        let entry = &self.entries[idx];
        debug_assert_eq!(entry.remaining, 0, "completed process {idx} has work left");

        let turnaround = (self.now + slice - entry.process.arrival_time) as i64;
        self.completed.push(Completed::new(entry.process, turnaround));
        idx
    }

    pub fn entry(&self, idx: ProcIdx) -> &ProcEntry {
        &self.entries[idx]
    }

    pub fn all_completed(&self) -> bool {
        self.completed.len() == self.entries.len()
    }
}
