use rand::prelude::*;

use super::process::{Pid, Process};

pub fn random_processes(count: usize, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| Process {
            pid: i as Pid,
            arrival_time: rng.random_range(0..=10),
            burst_time: rng.random_range(1..=10),
            priority: rng.random_range(1..=5),
        })
        .collect()
}
