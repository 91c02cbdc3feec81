//=========================================================================
// Simulation
//=========================================================================
//
// The consumer-side contract driven by the loop.
//
// Per due step:   input(&InputState) → update(delta)
// Per iteration:  render()  (only if at least one step ran)
//
// Hooks do not return errors. A panic inside a hook is a callback fault:
// the loop stops, runs host cleanup and reports it from `start()`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::input::InputState;

//=== Simulation ==========================================================

/// Application callbacks invoked by [`LoopController`](crate::LoopController).
///
/// # Examples
///
/// ```
/// use cadence_engine::core::{InputState, KeyCode, Simulation};
///
/// #[derive(Default)]
/// struct Game {
///     height: f64,
///     climbing: bool,
/// }
///
/// impl Simulation for Game {
///     fn input(&mut self, input: &InputState) {
///         self.climbing = input.is_key_down(KeyCode::ArrowUp);
///     }
///
///     fn update(&mut self, delta: f64) {
///         if self.climbing {
///             self.height += 2.0 * delta;
///         }
///     }
///
///     fn render(&mut self) {}
/// }
/// ```
pub trait Simulation {
    /// Reads the input snapshot refreshed for this step.
    fn input(&mut self, input: &InputState);

    /// Advances the simulation by one fixed step of `delta` seconds.
    fn update(&mut self, delta: f64);

    /// Draws the latest simulation state.
    fn render(&mut self);
}

impl<S: Simulation + ?Sized> Simulation for Box<S> {
    fn input(&mut self, input: &InputState) {
        (**self).input(input);
    }

    fn update(&mut self, delta: f64) {
        (**self).update(delta);
    }

    fn render(&mut self) {
        (**self).render();
    }
}
