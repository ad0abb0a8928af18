use std::env;
use std::process::exit;
use std::str::FromStr;

use wattsim::{Process, Report, Sim, random_processes};

const DEFAULT_COUNT: usize = 5;
const DEFAULT_QUANTUM: u64 = 2;
const DEFAULT_SEED: u64 = 0;

fn main() {
    let mut args = env::args().skip(1);
    let count = parse_or(args.next(), DEFAULT_COUNT);
    let quantum = parse_or(args.next(), DEFAULT_QUANTUM);
    let seed = parse_or(args.next(), DEFAULT_SEED);

    let processes = random_processes(count, seed);
    run(processes, quantum);
}

fn run(processes: Vec<Process>, quantum: u64) {
    let mut sim = match Sim::new(processes, quantum) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid workload: {err}");
            exit(1);
        }
    };

    while !sim.all_completed() {
        let now = sim.state.now;
        for event in sim.step() {
            println!("t={now} {event:?}");
        }
    }

    let outcome = sim.into_outcome();
    let report = Report::from_outcome(&outcome);

    println!();
    println!(
        "{:>4} {:>8} {:>6} {:>9} {:>8} {:>11}",
        "pid", "arrival", "burst", "priority", "waiting", "turnaround"
    );
    for done in &outcome.completed {
        let p = &done.process;
        println!(
            "{:>4} {:>8} {:>6} {:>9} {:>8} {:>11}",
            p.pid, p.arrival_time, p.burst_time, p.priority, done.waiting_time, done.turnaround_time
        );
    }

    println!();
    println!("Steps simulated: {}", outcome.total_ticks);
    println!("Average waiting time: {}", fmt_opt(report.average_waiting_time));
    println!(
        "Average turnaround time: {}",
        fmt_opt(report.average_turnaround_time)
    );
    println!(
        "Total energy: {:.2} (execution {:.2}, idle {:.2})",
        report.energy.total, report.energy.execution, report.energy.idle
    );
    match report.utilization {
        Some(u) => println!("CPU utilization: {:.2}%", u * 100.0),
        None => println!("CPU utilization: n/a"),
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

fn parse_or<T: FromStr>(arg: Option<String>, default: T) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("usage: wattsim [count] [quantum] [seed]");
            exit(1);
        }),
        None => default,
    }
}
