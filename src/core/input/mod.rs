//=========================================================================
// Input State
//
// Per-step input snapshot with edge detection, owned by the loop and
// handed to the simulation by reference.
//
// Responsibilities:
// - Sample raw device state once per simulation step (`refresh`)
// - Derive just-pressed / just-released edges for keys and mouse buttons
// - Track the pointer position and its movement between refreshes
// - Expose read-only queries by raw code or by named code
//
// Notes:
// Raw device state belongs to the host and is only ever read here,
// through the `RawInput` collaborator passed to `refresh`. Edge queries
// are valid until the next refresh, so refresh must run exactly once per
// step on the loop thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod codes;
mod state_tracker;

//=== Internal Imports ====================================================

pub use codes::{KeyCode, MouseButton, KEY_CODE_COUNT, MOUSE_BUTTON_COUNT};
pub use state_tracker::StateTracker;

use crate::core::platform_bridge::RawInput;

//=== InputState ==========================================================

/// Keyboard and mouse state with per-step edges.
///
/// # Examples
///
/// ```
/// use cadence_engine::core::{InputState, KeyCode, RawInput};
///
/// struct UpHeld;
/// impl RawInput for UpHeld {
///     fn is_key_active(&self, code: u16) -> bool { code == 38 }
///     fn is_button_active(&self, _code: u16) -> bool { false }
///     fn pointer_position(&self) -> (f32, f32) { (0.0, 0.0) }
/// }
///
/// let mut input = InputState::new();
/// input.refresh(&UpHeld);
/// assert!(input.is_key_just_pressed(KeyCode::ArrowUp));
/// input.refresh(&UpHeld);
/// assert!(!input.is_key_just_pressed(KeyCode::ArrowUp));
/// assert!(input.is_key_down(KeyCode::ArrowUp));
/// ```
#[derive(Debug, Clone)]
pub struct InputState {
    keys: StateTracker,
    buttons: StateTracker,

    pointer: (f32, f32),
    pointer_delta: (f32, f32),
    refreshed: bool,
}

impl InputState {
    //--- Construction -----------------------------------------------------

    /// Creates a state tracking [`KEY_CODE_COUNT`] keys and
    /// [`MOUSE_BUTTON_COUNT`] buttons.
    pub fn new() -> Self {
        Self::with_domains(KEY_CODE_COUNT, MOUSE_BUTTON_COUNT)
    }

    /// Creates a state with custom domain sizes.
    pub fn with_domains(key_count: u16, button_count: u16) -> Self {
        Self {
            keys: StateTracker::new(key_count),
            buttons: StateTracker::new(button_count),
            pointer: (0.0, 0.0),
            pointer_delta: (0.0, 0.0),
            refreshed: false,
        }
    }

    //--- refresh() --------------------------------------------------------
    //
    // Samples every key and button code from the host and rebuilds all
    // edge sets. The first refresh reports zero pointer movement.
    //
    pub fn refresh<R>(&mut self, raw: &R)
    where
        R: RawInput + ?Sized,
    {
        self.keys.refresh(|code| raw.is_key_active(code));
        self.buttons.refresh(|code| raw.is_button_active(code));

        let pointer = raw.pointer_position();
        self.pointer_delta = if self.refreshed {
            (pointer.0 - self.pointer.0, pointer.1 - self.pointer.1)
        } else {
            (0.0, 0.0)
        };
        self.pointer = pointer;
        self.refreshed = true;
    }

    /// Forgets all sampled state. The next refresh reports every held code
    /// as just pressed and zero pointer movement.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
        self.pointer = (0.0, 0.0);
        self.pointer_delta = (0.0, 0.0);
        self.refreshed = false;
    }

    //=====================================================================
    // Query API - Raw Codes
    //=====================================================================

    /// `true` while the key code is held.
    pub fn is_down(&self, code: u16) -> bool {
        self.keys.is_down(code)
    }

    /// `true` on the step the key code went down.
    pub fn is_just_pressed(&self, code: u16) -> bool {
        self.keys.is_just_pressed(code)
    }

    /// `true` on the step the key code went up.
    pub fn is_just_released(&self, code: u16) -> bool {
        self.keys.is_just_released(code)
    }

    /// Like [`is_down`](Self::is_down) but for mouse button codes.
    pub fn is_button_code_down(&self, code: u16) -> bool {
        self.buttons.is_down(code)
    }

    /// Like [`is_just_pressed`](Self::is_just_pressed) but for mouse button codes.
    pub fn is_button_code_just_pressed(&self, code: u16) -> bool {
        self.buttons.is_just_pressed(code)
    }

    /// Like [`is_just_released`](Self::is_just_released) but for mouse button codes.
    pub fn is_button_code_just_released(&self, code: u16) -> bool {
        self.buttons.is_just_released(code)
    }

    //=====================================================================
    // Query API - Named Codes
    //=====================================================================

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.is_down(key.code())
    }

    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.is_just_pressed(key.code())
    }

    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.is_just_released(key.code())
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.is_button_code_down(button.code())
    }

    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.is_button_code_just_pressed(button.code())
    }

    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.is_button_code_just_released(button.code())
    }

    //=====================================================================
    // Query API - Pointer
    //=====================================================================

    /// Pointer position sampled on the last refresh, in host coordinates.
    pub fn pointer_position(&self) -> (f32, f32) {
        self.pointer
    }

    /// Pointer movement between the last two refreshes.
    pub fn pointer_delta(&self) -> (f32, f32) {
        self.pointer_delta
    }

    //=====================================================================
    // Query API - Domains
    //=====================================================================

    /// Keyboard domain tracker (iteration over held/pressed/released codes).
    pub fn keys(&self) -> &StateTracker {
        &self.keys
    }

    /// Mouse button domain tracker.
    pub fn buttons(&self) -> &StateTracker {
        &self.buttons
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
