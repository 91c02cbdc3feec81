//=========================================================================
// Loop Configuration
//=========================================================================
//
// Plain-data configuration for the loop and its window.
//
// Sources:
// - `LoopConfig::default()`            built-in defaults
// - `LoopConfig::from_toml_str(..)`    TOML, missing keys use defaults
// - `LoopBuilder::with_*` setters      programmatic overrides
//
// Example TOML:
// ```toml
// fixed_step = 0.01
// max_steps_per_poll = 8
//
// [window]
// title = "Sandbox"
// width = 1280
// height = 720
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::error::ConfigError;

//=== Defaults ============================================================

/// Default simulation rate, in steps per second.
pub const DEFAULT_TPS: f64 = 5000.0;

/// Default catch-up bound: 50 ms of simulation at [`DEFAULT_TPS`].
pub const DEFAULT_MAX_STEPS_PER_POLL: u32 = 250;

/// Longest idle wait allowed between iterations, in microseconds.
pub const MAX_IDLE_SLEEP_US: u64 = 1_000;

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_WINDOW_TITLE: &str = "Cadence Engine";

//=== WindowSettings ======================================================

/// Window the host opens when the loop starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl WindowSettings {
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE)
    }
}

//=== LoopConfig ==========================================================

/// Pacing and window configuration for a [`LoopController`](crate::LoopController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Length of one simulation step, in seconds.
    pub fixed_step: f64,

    /// Upper bound on steps drained per loop iteration.
    pub max_steps_per_poll: u32,

    /// Idle wait when an iteration had no step due, in microseconds, at
    /// most [`MAX_IDLE_SLEEP_US`]. `0` yields the thread instead of sleeping.
    pub idle_sleep_us: u64,

    /// Seconds between frame-rate reports.
    pub report_interval: f64,

    pub window: WindowSettings,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fixed_step: 1.0 / DEFAULT_TPS,
            max_steps_per_poll: DEFAULT_MAX_STEPS_PER_POLL,
            idle_sleep_us: 1_000,
            report_interval: 1.0,
            window: WindowSettings::default(),
        }
    }
}

impl LoopConfig {
    /// Parses a TOML document. Keys not present keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML, or any validation error.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: LoopConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_step.is_finite() && self.fixed_step > 0.0) {
            return Err(ConfigError::NonPositiveFixedStep(self.fixed_step));
        }
        if self.max_steps_per_poll == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        if self.idle_sleep_us > MAX_IDLE_SLEEP_US {
            return Err(ConfigError::IdleSleepTooLong {
                micros: self.idle_sleep_us,
            });
        }
        if !(self.report_interval.is_finite() && self.report_interval > 0.0) {
            return Err(ConfigError::NonPositiveReportInterval);
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        Ok(())
    }

    /// Idle wait as a [`Duration`].
    pub fn idle_sleep(&self) -> Duration {
        Duration::from_micros(self.idle_sleep_us)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
