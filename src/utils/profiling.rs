use std::time::{Duration, Instant};

use log::{debug, log_enabled, Level};

/// Counters and phase timings gathered during one physics step.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepStats {
    pub integrate_time: Duration,
    pub collision_time: Duration,
    pub total_frame_time: Duration,

    pub body_count: usize,
    pub pairs_tested: usize,
    pub overlaps: usize,
    pub impulses_applied: usize,
}

impl StepStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let total_us = self.total_frame_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        debug!(
            "step: {} bodies, {} pairs, {} overlaps, {} impulses",
            self.body_count, self.pairs_tested, self.overlaps, self.impulses_applied
        );
        debug!(
            "  integrate {:.3} ms ({:.1}%), collisions {:.3} ms ({:.1}%), total {:.3} ms",
            self.integrate_time.as_secs_f32() * 1000.0,
            (self.integrate_time.as_micros() as f32 / total_us) * 100.0,
            self.collision_time.as_secs_f32() * 1000.0,
            (self.collision_time.as_micros() as f32 / total_us) * 100.0,
            self.total_frame_time.as_secs_f32() * 1000.0,
        );
    }
}

/// Adds the lifetime of the guard to `output` when dropped.
pub struct ScopedTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
