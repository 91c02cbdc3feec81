//=========================================================================
// Input Codes
//=========================================================================
//
// Named tables for the numeric codes the input core works with.
//
// The core tracks raw `u16` codes in two fixed-size domains:
// - keys:          0..KEY_CODE_COUNT      (virtual-key numbering)
// - mouse buttons: 0..MOUSE_BUTTON_COUNT
//
// `KeyCode` and `MouseButton` are typed aliases for the common codes.
// Key numbering follows the Windows virtual-key table, so e.g. the
// up-arrow is 38 and `A` is 65 on every platform.
//
//=========================================================================

//=== Domain Sizes ========================================================

/// Number of key codes tracked (`0..256`).
pub const KEY_CODE_COUNT: u16 = 256;

/// Number of mouse buttons tracked (`0..5`).
pub const MOUSE_BUTTON_COUNT: u16 = 5;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The discriminant is the button's code in the mouse domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left = 0,

    /// Secondary button (typically right).
    Right = 1,

    /// Middle button (wheel click).
    Middle = 2,

    /// Side button, usually "back".
    Back = 3,

    /// Side button, usually "forward".
    Forward = 4,
}

impl MouseButton {
    /// Numeric code in the mouse-button domain.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Reverse lookup. `None` for codes outside the domain.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Middle),
            3 => Some(Self::Back),
            4 => Some(Self::Forward),
            _ => None,
        }
    }
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// The discriminant is the key's code in the key domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum KeyCode {
    //--- Special Keys -----------------------------------------------------
    Backspace = 8,
    Tab = 9,
    Enter = 13,
    Escape = 27,
    Space = 32,
    Delete = 46,

    //--- Arrow Keys -------------------------------------------------------
    ArrowLeft = 37,
    ArrowUp = 38,
    ArrowRight = 39,
    ArrowDown = 40,

    //--- Numeric Keys -----------------------------------------------------
    Digit0 = 48,
    Digit1 = 49,
    Digit2 = 50,
    Digit3 = 51,
    Digit4 = 52,
    Digit5 = 53,
    Digit6 = 54,
    Digit7 = 55,
    Digit8 = 56,
    Digit9 = 57,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA = 65,
    KeyB = 66,
    KeyC = 67,
    KeyD = 68,
    KeyE = 69,
    KeyF = 70,
    KeyG = 71,
    KeyH = 72,
    KeyI = 73,
    KeyJ = 74,
    KeyK = 75,
    KeyL = 76,
    KeyM = 77,
    KeyN = 78,
    KeyO = 79,
    KeyP = 80,
    KeyQ = 81,
    KeyR = 82,
    KeyS = 83,
    KeyT = 84,
    KeyU = 85,
    KeyV = 86,
    KeyW = 87,
    KeyX = 88,
    KeyY = 89,
    KeyZ = 90,

    //--- Modifiers --------------------------------------------------------
    ShiftLeft = 160,
    ShiftRight = 161,
    ControlLeft = 162,
    ControlRight = 163,
    AltLeft = 164,
    AltRight = 165,
}

impl KeyCode {
    /// Numeric code in the key domain.
    pub const fn code(self) -> u16 {
        self as u16
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
