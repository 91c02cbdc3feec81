//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Host-side collaborator contracts consumed by the loop core.
//
// - `RawInput`: point-in-time device queries, sampled once per step
// - `Host`: window lifecycle plus close/present hooks
//
// Implementations live outside the core (see `crate::platform` for the
// winit-backed one). The core never buffers raw input.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::config::WindowSettings;
use crate::core::error::HostError;

//=== RawInput ============================================================

/// Point-in-time device state, queried by raw code.
///
/// Codes outside a domain must report `false`.
pub trait RawInput {
    /// `true` if key `code` is currently held.
    fn is_key_active(&self, code: u16) -> bool;

    /// `true` if mouse button `code` is currently held.
    fn is_button_active(&self, code: u16) -> bool;

    /// Pointer position in window coordinates.
    fn pointer_position(&self) -> (f32, f32);
}

//=== Host ================================================================

/// Windowing collaborator driven by the loop.
///
/// Lifecycle per `start()`:
/// `create_window` → (`is_close_requested` / `present`)* → `dispose`.
///
/// `dispose` is only called after a successful `create_window`, exactly
/// once per run.
pub trait Host: RawInput {
    /// Opens the window and its input devices.
    fn create_window(&mut self, settings: &WindowSettings) -> Result<(), HostError>;

    /// Polled once per loop iteration.
    fn is_close_requested(&mut self) -> bool;

    /// Shows the frame the simulation just rendered.
    fn present(&mut self);

    /// Releases window and device resources.
    fn dispose(&mut self);
}
