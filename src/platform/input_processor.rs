//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit device events into held-state the loop can sample.
//
// Architecture:
//   WindowEvent → InputProcessor → held keys / buttons / pointer
//                                      ↑
//                     RawInput queries (once per simulation step)
//
// Only current state is kept; nothing is buffered. Unmapped keys (F-keys,
// numpad, media keys) and exotic buttons are filtered out.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::trace;
use winit::{
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Held device state fed by winit events.
#[derive(Debug, Default)]
pub(crate) struct InputProcessor {
    keys: HashSet<u16>,
    buttons: HashSet<u16>,
    pointer: (f32, f32),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self::default()
    }

    //--- Event Processing -------------------------------------------------

    /// Applies a physical key press/release. Unmapped keys are ignored.
    pub(crate) fn process_key(&mut self, physical: PhysicalKey, state: ElementState) {
        let Some(key) = map_physical_key(physical) else {
            trace!(target: "platform::input", "Unmapped key ignored: {:?}", physical);
            return;
        };

        match state {
            ElementState::Pressed => self.keys.insert(key.code()),
            ElementState::Released => self.keys.remove(&key.code()),
        };
    }

    /// Applies a mouse button press/release. Unmapped buttons are ignored.
    pub(crate) fn process_mouse_button(&mut self, button: WinitMouseButton, state: ElementState) {
        let Some(button) = map_mouse_button(button) else {
            return;
        };

        match state {
            ElementState::Pressed => self.buttons.insert(button.code()),
            ElementState::Released => self.buttons.remove(&button.code()),
        };
    }

    /// Records the latest pointer position (window coordinates).
    pub(crate) fn process_cursor_moved(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Drops all held keys and buttons (focus loss, window teardown).
    ///
    /// Release events are not delivered to an unfocused window, so held
    /// state would otherwise stick.
    pub(crate) fn release_all(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }

    //--- Queries ----------------------------------------------------------

    pub(crate) fn is_key_held(&self, code: u16) -> bool {
        self.keys.contains(&code)
    }

    pub(crate) fn is_button_held(&self, code: u16) -> bool {
        self.buttons.contains(&code)
    }

    pub(crate) fn pointer(&self) -> (f32, f32) {
        self.pointer
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps a winit physical key to an engine key.
pub(crate) fn map_physical_key(physical: PhysicalKey) -> Option<KeyCode> {
    match physical {
        PhysicalKey::Code(code) => map_key_code(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Maps A-Z, 0-9, arrows, modifiers and common special keys.
pub(crate) fn map_key_code(code: WinitKeyCode) -> Option<KeyCode> {
    use WinitKeyCode::*;
    let key = match code {
        //--- Digits -------------------------------------------------------
        Digit0 => KeyCode::Digit0,
        Digit1 => KeyCode::Digit1,
        Digit2 => KeyCode::Digit2,
        Digit3 => KeyCode::Digit3,
        Digit4 => KeyCode::Digit4,
        Digit5 => KeyCode::Digit5,
        Digit6 => KeyCode::Digit6,
        Digit7 => KeyCode::Digit7,
        Digit8 => KeyCode::Digit8,
        Digit9 => KeyCode::Digit9,

        //--- Letters ------------------------------------------------------
        KeyA => KeyCode::KeyA,
        KeyB => KeyCode::KeyB,
        KeyC => KeyCode::KeyC,
        KeyD => KeyCode::KeyD,
        KeyE => KeyCode::KeyE,
        KeyF => KeyCode::KeyF,
        KeyG => KeyCode::KeyG,
        KeyH => KeyCode::KeyH,
        KeyI => KeyCode::KeyI,
        KeyJ => KeyCode::KeyJ,
        KeyK => KeyCode::KeyK,
        KeyL => KeyCode::KeyL,
        KeyM => KeyCode::KeyM,
        KeyN => KeyCode::KeyN,
        KeyO => KeyCode::KeyO,
        KeyP => KeyCode::KeyP,
        KeyQ => KeyCode::KeyQ,
        KeyR => KeyCode::KeyR,
        KeyS => KeyCode::KeyS,
        KeyT => KeyCode::KeyT,
        KeyU => KeyCode::KeyU,
        KeyV => KeyCode::KeyV,
        KeyW => KeyCode::KeyW,
        KeyX => KeyCode::KeyX,
        KeyY => KeyCode::KeyY,
        KeyZ => KeyCode::KeyZ,

        //--- Arrows -------------------------------------------------------
        ArrowUp => KeyCode::ArrowUp,
        ArrowDown => KeyCode::ArrowDown,
        ArrowLeft => KeyCode::ArrowLeft,
        ArrowRight => KeyCode::ArrowRight,

        //--- Modifiers ----------------------------------------------------
        ShiftLeft => KeyCode::ShiftLeft,
        ShiftRight => KeyCode::ShiftRight,
        ControlLeft => KeyCode::ControlLeft,
        ControlRight => KeyCode::ControlRight,
        AltLeft => KeyCode::AltLeft,
        AltRight => KeyCode::AltRight,

        //--- Special ------------------------------------------------------
        Space => KeyCode::Space,
        Enter => KeyCode::Enter,
        Escape => KeyCode::Escape,
        Tab => KeyCode::Tab,
        Backspace => KeyCode::Backspace,
        Delete => KeyCode::Delete,

        _ => return None,
    };
    Some(key)
}

/// Left/Right/Middle/Back/Forward map directly; `Other(_)` is dropped.
pub(crate) fn map_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        WinitMouseButton::Back => Some(MouseButton::Back),
        WinitMouseButton::Forward => Some(MouseButton::Forward),
        WinitMouseButton::Other(_) => None,
    }
}

//=========================================================================
// Tests
//=========================================================================
