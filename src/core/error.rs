//=========================================================================
// Error Types
//=========================================================================
//
// Error taxonomy for the loop core.
//
// - `ConfigError`: invalid pacing/window configuration (construction time)
// - `HostError`: window or device creation failure reported by the host
// - `LoopError`: what `LoopController::start()` can return
//
// Nothing in the core retries. Errors either refuse construction or end
// the running loop.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ConfigError =========================================================

/// Invalid loop configuration. Detected before anything runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("fixed step must be a positive, finite number of seconds, got {0}")]
    NonPositiveFixedStep(f64),

    #[error("max steps per poll must be at least 1")]
    ZeroMaxSteps,

    #[error("idle sleep of {micros}us exceeds the 1000us bound")]
    IdleSleepTooLong { micros: u64 },

    #[error("report interval must be greater than zero")]
    NonPositiveReportInterval,

    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("config parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

//=== HostError ===========================================================

/// Window/device initialization failure raised by a [`Host`](crate::core::Host).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The OS event loop could not be created.
    #[error("event loop creation failed: {0}")]
    EventLoop(String),

    /// The window (or its input devices) could not be created.
    #[error("window creation failed: {0}")]
    WindowCreation(String),
}

//=== LoopError ===========================================================

/// Failure returned from [`LoopController::start`](crate::LoopController::start).
#[derive(Debug, Error)]
pub enum LoopError {
    /// The host could not open its window; the loop never entered `Running`.
    #[error("host initialization failed: {0}")]
    HostInit(#[from] HostError),

    /// A simulation hook panicked. The loop was stopped and cleaned up.
    #[error("simulation `{hook}` hook faulted: {message}")]
    CallbackFault { hook: &'static str, message: String },
}

//=========================================================================
// Unit Tests
//=========================================================================
