use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Scoped trace timer wrapped around one simulation pass.
pub struct PassTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> PassTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("pass {label} start");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for PassTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("pass {} done ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Warns when a simulation step overran the wall-clock slice budgeted for it.
pub fn warn_if_step_budget_exceeded(duration: Duration, budget_ms: f32) {
    if duration.as_secs_f32() * 1000.0 > budget_ms {
        warn!(
            "step exceeded budget: {:.2} ms > {:.2} ms",
            duration.as_secs_f32() * 1000.0,
            budget_ms
        );
    }
}
