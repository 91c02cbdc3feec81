//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit/SDL/headless/etc.) with the core.
//
// This module defines the contract between host implementations and the
// loop, so a backend can be swapped without changing core code.
//
// Components:
// - `interface`: host and raw-input traits (the contract)
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod interface;

//=== Public API ==========================================================

pub use interface::{Host, RawInput};
