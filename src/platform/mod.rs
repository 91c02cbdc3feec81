//=========================================================================
// Platform Subsystem
//
// Winit-backed implementation of the host collaborators.
//
// Architecture:
// ```text
//  Loop thread (single):
//  ┌──────────────────────────────────────────────┐
//  │ LoopController                                │
//  │   ├─ create_window() ──┐                      │
//  │   ├─ is_close_requested() ─► pump events ──┐  │
//  │   ├─ RawInput queries ◄── InputProcessor ◄─┤  │
//  │   ├─ present() ─► request_redraw           │  │
//  │   └─ dispose() ─► drop window              │  │
//  │                         HostState (ApplicationHandler)
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Pump, don't run**: the loop owns control flow, so the OS event loop
//   is pumped with a zero timeout once per iteration instead of handing
//   the thread to `run_app()`
// - **Event loop is created once**: winit refuses to recreate it, so it
//   is kept across dispose/start cycles and only the window is dropped
// - **Held state, not events**: input is folded into held keys/buttons as
//   it arrives; the core samples it once per simulation step
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so the loop using this host must run there
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::time::Duration;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::{Host, HostError, RawInput, WindowSettings};
use input_processor::InputProcessor;

/// Pumps allowed for the OS to deliver the first `resumed` event.
const WINDOW_CREATION_PUMPS: usize = 16;

//=== WinitHost ===========================================================

/// Window and raw-input host built on winit.
///
/// # Lifecycle
///
/// 1. **Construction**: `WinitHost::new()` - nothing touches the OS yet
/// 2. **create_window**: event loop (first time only) and window creation
/// 3. **is_close_requested**: pumps pending OS events, updates input state
/// 4. **dispose**: drops the window, keeps the event loop for restarts
///
/// # Thread Safety
///
/// Not Send/Sync; must stay on the thread that created it.
pub struct WinitHost {
    /// OS event loop (None until the first `create_window`).
    event_loop: Option<EventLoop<()>>,

    /// State mutated from winit callbacks.
    state: HostState,
}

impl WinitHost {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            event_loop: None,
            state: HostState::default(),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Inner size of the open window in physical pixels.
    pub fn window_size(&self) -> Option<(u32, u32)> {
        self.state
            .window
            .as_ref()
            .map(|w| (w.inner_size().width, w.inner_size().height))
    }

    /// Title of the open window.
    pub fn window_title(&self) -> Option<String> {
        self.state.window.as_ref().map(|w| w.title())
    }

    //--- Internal Helpers -------------------------------------------------

    /// Delivers all pending OS events. Returns `false` if the event loop exited.
    fn pump(&mut self) -> bool {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return false;
        };

        match event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state) {
            PumpStatus::Continue => true,
            PumpStatus::Exit(code) => {
                warn!(target: "platform", "Event loop exited (code {})", code);
                false
            }
        }
    }
}

impl Default for WinitHost {
    fn default() -> Self {
        Self::new()
    }
}

//=== Host Implementation =================================================

impl RawInput for WinitHost {
    fn is_key_active(&self, code: u16) -> bool {
        self.state.input.is_key_held(code)
    }

    fn is_button_active(&self, code: u16) -> bool {
        self.state.input.is_button_held(code)
    }

    fn pointer_position(&self) -> (f32, f32) {
        self.state.input.pointer()
    }
}

impl Host for WinitHost {
    fn create_window(&mut self, settings: &WindowSettings) -> Result<(), HostError> {
        if self.state.window.is_some() {
            debug!(target: "platform", "Window already exists");
            return Ok(());
        }

        if self.event_loop.is_none() {
            let event_loop =
                EventLoop::new().map_err(|e| HostError::EventLoop(e.to_string()))?;
            self.event_loop = Some(event_loop);
        }

        self.state.pending = Some(
            WindowAttributes::default()
                .with_title(settings.title())
                .with_inner_size(LogicalSize::new(settings.width(), settings.height())),
        );
        self.state.creation_error = None;
        self.state.close_requested = false;

        for _ in 0..WINDOW_CREATION_PUMPS {
            if !self.pump() {
                return Err(HostError::WindowCreation("event loop exited".into()));
            }
            if let Some(err) = self.state.creation_error.take() {
                return Err(HostError::WindowCreation(err));
            }
            if self.state.window.is_some() {
                return Ok(());
            }
        }

        self.state.pending = None;
        Err(HostError::WindowCreation("event loop never became active".into()))
    }

    fn is_close_requested(&mut self) -> bool {
        if !self.pump() {
            self.state.close_requested = true;
        }
        self.state.close_requested
    }

    fn present(&mut self) {
        if let Some(window) = &self.state.window {
            window.pre_present_notify();
            window.request_redraw();
        }
    }

    fn dispose(&mut self) {
        if self.state.window.take().is_some() {
            info!(target: "platform", "Window disposed");
        }
        self.state.pending = None;
        self.state.input.release_all();

        // Let the OS process the destroy request
        self.pump();
    }
}

//=== HostState ===========================================================

/// Callback-side state driven by winit.
#[derive(Default)]
struct HostState {
    /// Attributes of a window waiting for an active event loop.
    pending: Option<WindowAttributes>,
    window: Option<Window>,
    creation_error: Option<String>,
    close_requested: bool,
    input: InputProcessor,
}

impl HostState {
    fn create_pending_window(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attrs) = self.pending.take() else {
            return;
        };

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.creation_error = Some(e.to_string());
            }
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for HostState {
    /// Called when the app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending_window(event_loop);
    }

    /// Later windows (after a dispose) are created here, since `resumed`
    /// only fires once on desktop.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending_window(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close_requested = true;
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.input.process_key(event.physical_key, event.state);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_moved(position.x as f32, position.y as f32);
            }

            WindowEvent::Focused(false) => {
                trace!(target: "platform::input", "Focus lost, releasing held input");
                self.input.release_all();
            }

            _ => {
                // Ignore: Resized, RedrawRequested, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyCode, MouseButton};

    // Creating a real event loop needs a display and the main thread, so
    // these tests stay on the pre-window paths.

    #[test]
    fn host_creation_touches_nothing() {
        let host = WinitHost::new();
        assert!(host.event_loop.is_none());
        assert!(host.window_size().is_none());
        assert!(host.window_title().is_none());
    }

    #[test]
    fn raw_input_reads_processor_state() {
        let mut host = WinitHost::new();
        host.state.input.process_cursor_moved(12.0, 34.0);
        host.state.input.process_mouse_button(
            winit::event::MouseButton::Left,
            winit::event::ElementState::Pressed,
        );

        assert_eq!(host.pointer_position(), (12.0, 34.0));
        assert!(host.is_button_active(MouseButton::Left.code()));
        assert!(!host.is_key_active(KeyCode::ArrowUp.code()));
    }

    #[test]
    fn close_requested_without_event_loop() {
        let mut host = WinitHost::new();
        assert!(host.is_close_requested(), "No event loop means nothing to run");
    }

    #[test]
    fn dispose_without_window_is_safe() {
        let mut host = WinitHost::new();
        host.state.input.process_mouse_button(
            winit::event::MouseButton::Right,
            winit::event::ElementState::Pressed,
        );

        host.dispose();

        assert!(!host.is_button_active(MouseButton::Right.code()));
    }

    #[test]
    fn present_without_window_is_noop() {
        let mut host = WinitHost::new();
        host.present();
    }
}
