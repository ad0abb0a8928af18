use average::{Estimate, Mean};

use crate::core::driver::Outcome;
use crate::energy::IDLE_COST_PER_TICK;

// Structured chart data: execution + idle always sums to total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBreakdown {
    pub execution: f64,
    pub idle: f64,
    pub total: f64,
}

// Means and utilization are None for an empty workload, never NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub average_waiting_time: Option<f64>,
    pub average_turnaround_time: Option<f64>,
    pub utilization: Option<f64>,
    pub energy: EnergyBreakdown,
}

impl Report {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let idle = outcome.idle_ticks as f64 * IDLE_COST_PER_TICK;
        let energy = EnergyBreakdown {
            execution: outcome.energy_consumed - idle,
            idle,
            total: outcome.energy_consumed,
        };

        if outcome.completed.is_empty() || outcome.total_ticks == 0 {
            return Self {
                average_waiting_time: None,
                average_turnaround_time: None,
                utilization: None,
                energy,
            };
        }

        Self {
            average_waiting_time: Some(avg(
                outcome.completed.iter().map(|c| c.waiting_time as f64),
            )),
            average_turnaround_time: Some(avg(
                outcome.completed.iter().map(|c| c.turnaround_time as f64),
            )),
            utilization: Some(1.0 - outcome.idle_ticks as f64 / outcome.total_ticks as f64),
            energy,
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::driver::run_workload;
    use crate::sim::process::Process;

    const EPS: f64 = 1e-9;

    fn proc(pid: u64, arrival: u64, burst: u64) -> Process {
        Process {
            pid,
            arrival_time: arrival,
            burst_time: burst,
            priority: 1,
        }
    }

    #[test]
    fn energy_split_sums_to_total() {
        let outcome = run_workload(vec![proc(0, 2, 1), proc(1, 5, 3)], 2).unwrap();
        let report = Report::from_outcome(&outcome);
        let sum = report.energy.execution + report.energy.idle;
        assert!((sum - report.energy.total).abs() < EPS);
        assert!((report.energy.total - outcome.energy_consumed).abs() < EPS);
    }

    #[test]
    fn utilization_accounts_for_idle_steps() {
        // Two idle steps, then a one-tick burst: 3 steps total.
        let outcome = run_workload(vec![proc(0, 2, 1)], 2).unwrap();
        let report = Report::from_outcome(&outcome);
        let utilization = report.utilization.unwrap();
        assert!((utilization - (1.0 - 2.0 / 3.0)).abs() < EPS);
        assert!((0.0..=1.0).contains(&utilization));
        assert_eq!(report.average_waiting_time, Some(0.0));
        assert!((report.energy.idle - 0.2).abs() < EPS);
        assert!((report.energy.execution - 0.5).abs() < EPS);
    }

    #[test]
    fn averages_over_several_completions() {
        let outcome = run_workload(vec![proc(0, 0, 4), proc(1, 0, 2)], 2).unwrap();
        let report = Report::from_outcome(&outcome);
        // Waiting times are 1 (pid 1) and 0 (pid 0).
        assert!((report.average_waiting_time.unwrap() - 0.5).abs() < EPS);
        assert_eq!(report.utilization, Some(1.0));
    }

    #[test]
    fn empty_outcome_reports_not_applicable() {
        let outcome = run_workload(Vec::new(), 2).unwrap();
        let report = Report::from_outcome(&outcome);
        assert_eq!(report.average_waiting_time, None);
        assert_eq!(report.average_turnaround_time, None);
        assert_eq!(report.utilization, None);
        assert_eq!(report.energy.total, 0.0);
    }
}
