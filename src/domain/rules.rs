use super::grid::{ALIVE, DEAD};

/// Default upper bound on the combined signal for an alive cell to survive.
/// Thresholds are `f64` so `0.8` means the real 0.8, not the nearest `f32`
/// (which lies just above it).
pub const SURVIVAL_MAX: f64 = 0.8;

/// Default lower bound on the combined signal for a dead cell to be born.
pub const BIRTH_MIN: f64 = 0.275;

/// Trait for continuous cellular automaton rules
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Compute the next state from the current state and the combined
    /// neighborhood signal
    fn next_state(&self, current: f32, combined: f32) -> f32;
}

/// Only an exact 1.0 counts as alive for branch selection; fractional
/// states are treated as dead even though they still feed the averages.
#[inline]
pub fn is_alive(state: f32) -> bool {
    state == ALIVE
}

/// Two-threshold continuous rule.
/// Survivors and newborns take `(1 + combined) / 2`, everything else dies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousRule {
    survival_max: f64,
    birth_min: f64,
}

impl ContinuousRule {
    pub const fn new(survival_max: f64, birth_min: f64) -> Self {
        Self {
            survival_max,
            birth_min,
        }
    }

    pub const fn survival_max(&self) -> f64 {
        self.survival_max
    }

    pub const fn birth_min(&self) -> f64 {
        self.birth_min
    }
}

impl Default for ContinuousRule {
    fn default() -> Self {
        Self::new(SURVIVAL_MAX, BIRTH_MIN)
    }
}

impl Rule for ContinuousRule {
    fn name(&self) -> &'static str {
        "Continuous"
    }

    fn description(&self) -> &'static str {
        "Two-scale average, survive <= max, born >= min"
    }

    fn next_state(&self, current: f32, combined: f32) -> f32 {
        let signal = f64::from(combined);
        let lives = if is_alive(current) {
            signal <= self.survival_max
        } else {
            signal >= self.birth_min
        };

        if lives { (1.0 + combined) / 2.0 } else { DEAD }
    }
}

/// Get default rule
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ContinuousRule::default())
}
