//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cadence_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Loop runtime
pub use crate::engine::{LoopBuilder, LoopController, StopHandle};
pub use crate::platform::WinitHost;

// Collaborator contracts
pub use crate::core::{Host, RawInput, Simulation};

// Input
pub use crate::core::{InputState, KeyCode, MouseButton};

// Configuration and errors
pub use crate::core::{ConfigError, HostError, LoopConfig, LoopError, WindowSettings};

// Frame-rate reporting
pub use crate::core::{ChannelSink, FrameRateSink, LogSink};
