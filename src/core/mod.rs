//=========================================================================
// Core
//
// Host-independent building blocks of the loop.
//
// Components (leaf-first):
// - `clock`:           monotonic time source, tick → seconds conversion
// - `input`:           per-step input snapshot with edge detection
// - `pacer`:           fixed-timestep accumulator with catch-up cap
// - `simulation`:      callbacks the loop drives
// - `platform_bridge`: host window / raw-input contracts
// - `observability`:   frame-rate sinks
// - `config`, `error`: configuration data and error taxonomy
//
// Notes:
// Everything here is single-threaded and owned by the loop thread.
// `LoopController` (crate root) wires these pieces together.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod observability;
pub mod pacer;
pub mod platform_bridge;
pub mod simulation;

//=== Public API ==========================================================

pub use clock::{elapsed_seconds, Clock, ManualClock, MonotonicClock, Timestamp, TICKS_PER_SECOND};
pub use config::{LoopConfig, WindowSettings};
pub use error::{ConfigError, HostError, LoopError};
pub use input::{InputState, KeyCode, MouseButton, StateTracker};
pub use observability::{ChannelSink, FrameRateSink, LogSink, NullSink};
pub use pacer::{DueSteps, FramePacer};
pub use platform_bridge::{Host, RawInput};
pub use simulation::Simulation;
