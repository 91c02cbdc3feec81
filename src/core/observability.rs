//=========================================================================
// Observability
//=========================================================================
//
// Frame-rate reporting sink.
//
// The loop counts rendered frames and hands the count to a sink once per
// report interval (1 s by default), then resets the counter. No other
// metrics exist.
//
// Stock sinks:
// - `LogSink`:     `info!` record on target `cadence::fps`
// - `ChannelSink`: forwards counts over a crossbeam channel
// - `NullSink`:    drops them
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{info, warn};

//=== FrameRateSink =======================================================

/// Receives the number of frames rendered during the last interval.
pub trait FrameRateSink {
    fn report_frames(&mut self, frames: u32);
}

//=== LogSink =============================================================

/// Logs each report through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl FrameRateSink for LogSink {
    fn report_frames(&mut self, frames: u32) {
        info!(target: "cadence::fps", "{} frames/s", frames);
    }
}

//=== ChannelSink =========================================================

/// Forwards reports to another thread.
///
/// Never blocks the loop: on a full bounded channel the report is dropped,
/// and once the receiver is gone reports are dropped silently after a
/// single warning.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<u32>,
    disconnected: bool,
}

impl ChannelSink {
    pub fn new(sender: Sender<u32>) -> Self {
        Self {
            sender,
            disconnected: false,
        }
    }
}

impl FrameRateSink for ChannelSink {
    fn report_frames(&mut self, frames: u32) {
        match self.sender.try_send(frames) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "cadence::fps", "Report channel full, dropping {} frames/s", frames);
            }
            Err(TrySendError::Disconnected(_)) => {
                if !self.disconnected {
                    warn!(target: "cadence::fps", "Report channel disconnected");
                    self.disconnected = true;
                }
            }
        }
    }
}

//=== NullSink ============================================================

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameRateSink for NullSink {
    fn report_frames(&mut self, _frames: u32) {}
}

//=========================================================================
// Unit Tests
//=========================================================================
