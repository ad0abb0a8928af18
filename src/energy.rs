use crate::core::state::Ticks;

pub const ACTIVE_COST_PER_TICK: f64 = 0.5;
pub const IDLE_COST_PER_TICK: f64 = 0.1;

// Two-level linear model: active execution burns five times what idling does.
pub fn cost(duration: Ticks, active: bool) -> f64 {
    let per_tick = if active {
        ACTIVE_COST_PER_TICK
    } else {
        IDLE_COST_PER_TICK
    };
    duration as f64 * per_tick
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn scales_linearly_with_duration() {
        assert!((cost(4, true) - 2.0).abs() < EPS);
        assert!((cost(3, false) - 0.3).abs() < EPS);
        assert_eq!(cost(0, true), 0.0);
    }

    #[test]
    fn active_costs_more_than_idle() {
        assert!(cost(1, true) > cost(1, false));
    }

    #[test]
    fn is_pure() {
        let first = cost(5, false);
        let _ = cost(9, true);
        assert_eq!(cost(5, false), first);
    }
}
