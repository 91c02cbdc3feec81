//=========================================================================
// Frame Pacer
//=========================================================================
//
// Fixed-timestep accumulator.
//
// Architecture:
//   poll(elapsed) → accumulated += elapsed
//   step_due()    → true while accumulated >= fixed_step (bounded)
//
// Per-poll lifecycle: poll() → step_due()* → false
//
// `max_steps_per_poll` caps catch-up work. When the cap is reached with a
// full step still pending, the surplus is dropped instead of being carried
// into the next poll, so a stall can never snowball into a spiral of death.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::error::ConfigError;

//=== FramePacer ==========================================================

/// Decides how many fixed simulation steps are due per real-time slice.
#[derive(Debug, Clone)]
pub struct FramePacer {
    fixed_step: f64,
    max_steps_per_poll: u32,

    accumulated: f64,
    steps_this_poll: u32,
}

impl FramePacer {
    /// Creates a pacer.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NonPositiveFixedStep`] if `fixed_step` is not a positive
    /// finite number, [`ConfigError::ZeroMaxSteps`] if `max_steps_per_poll`
    /// is 0.
    pub fn new(fixed_step: f64, max_steps_per_poll: u32) -> Result<Self, ConfigError> {
        if !(fixed_step.is_finite() && fixed_step > 0.0) {
            return Err(ConfigError::NonPositiveFixedStep(fixed_step));
        }
        if max_steps_per_poll == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }

        Ok(Self {
            fixed_step,
            max_steps_per_poll,
            accumulated: 0.0,
            steps_this_poll: 0,
        })
    }

    //--- Accumulation -----------------------------------------------------

    /// Adds real elapsed time and starts a new drain cycle.
    ///
    /// Negative or non-finite input is treated as no time passing.
    pub fn poll(&mut self, elapsed_seconds: f64) {
        if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            self.accumulated += elapsed_seconds;
        }
        self.steps_this_poll = 0;
    }

    /// Consumes one fixed step if one is due.
    ///
    /// Returns `false` once the accumulator holds less than a step or the
    /// per-poll cap is hit; that also rearms the counter for the next poll.
    pub fn step_due(&mut self) -> bool {
        if self.accumulated >= self.fixed_step {
            if self.steps_this_poll < self.max_steps_per_poll {
                self.accumulated -= self.fixed_step;
                self.steps_this_poll += 1;
                return true;
            }

            warn!(
                "Catch-up cap reached ({} steps), discarding {:.4}s of simulation time",
                self.max_steps_per_poll, self.accumulated
            );
            self.accumulated = 0.0;
        }

        self.steps_this_poll = 0;
        false
    }

    /// Lazy view over the steps due for the current poll.
    pub fn due_steps(&mut self) -> DueSteps<'_> {
        DueSteps { pacer: self }
    }

    /// Drops all accumulated time.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.steps_this_poll = 0;
    }

    //--- Queries ----------------------------------------------------------

    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    pub fn max_steps_per_poll(&self) -> u32 {
        self.max_steps_per_poll
    }

    /// Unspent time, in seconds.
    pub fn accumulated_time(&self) -> f64 {
        self.accumulated
    }

    /// Fraction of a step left in the accumulator (`0.0..1.0` after draining).
    ///
    /// Useful to interpolate render state between the last two steps.
    pub fn interpolation_alpha(&self) -> f64 {
        self.accumulated / self.fixed_step
    }
}

//=== DueSteps ============================================================

/// Iterator yielding once per due step (see [`FramePacer::step_due`]).
///
/// Finite. A fresh sequence only becomes available after the next `poll`.
pub struct DueSteps<'a> {
    pacer: &'a mut FramePacer,
}

impl Iterator for DueSteps<'_> {
    type Item = ();

    fn next(&mut self) -> Option<()> {
        self.pacer.step_due().then_some(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
