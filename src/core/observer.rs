use super::state::{SimState, Ticks};

#[derive(Debug)]
pub struct Observer {
    steps: u64,
    last_energy: f64,
    last_idle: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self {
            steps: 0,
            last_energy: 0.0,
            last_idle: 0,
        }
    }

    pub fn observe(&mut self, state: &SimState) {
        self.steps += 1;
        debug_assert_eq!(state.now, self.steps, "clock must advance by 1 per step");
        debug_assert!(
            state.energy_consumed >= self.last_energy,
            "energy total went backwards"
        );
        debug_assert!(
            state.idle_ticks >= self.last_idle,
            "idle count went backwards"
        );
        self.last_energy = state.energy_consumed;
        self.last_idle = state.idle_ticks;

        if let Some(idx) = state.running {
            debug_assert!(
                !state.ready.contains(&idx),
                "running process {idx} still queued"
            );
            debug_assert!(
                state.entries[idx].remaining > 0,
                "running process {idx} has no work left"
            );
        }

        for (pos, &idx) in state.ready.iter().enumerate() {
            debug_assert!(
                state.admitted.contains(&idx),
                "queued process {idx} was never admitted"
            );
            debug_assert!(
                state.entries[idx].remaining > 0,
                "queued process {idx} has no work left"
            );
            debug_assert!(
                !state.ready.iter().skip(pos + 1).any(|&other| other == idx),
                "process {idx} queued twice"
            );
        }

        debug_assert!(
            state.completed.len() <= state.entries.len(),
            "more completions than processes"
        );
        for done in &state.completed {
            debug_assert_eq!(
                done.waiting_time,
                done.turnaround_time - done.process.burst_time as i64,
                "waiting/turnaround identity broken for pid {}",
                done.process.pid
            );
        }
    }
}
