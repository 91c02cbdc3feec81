//=========================================================================
// Cadence Engine
//
// Main entry point: configures and runs the fixed-timestep loop.
//
// Architecture:
// ```text
//     LoopBuilder  ──build()──>  LoopController  ──start()──>  [Running]
//         │                          │                            │
//         ├─ with_tps()              ├─ stop() / StopHandle       └─ blocks until
//         ├─ with_max_steps_…()      └─ Idle ⇄ Running               close/stop/fault
//         └─ with_clock()/_sink()
// ```
//
// Iteration (while Running):
//   1. Clock::now() → elapsed since previous iteration
//   2. Host::is_close_requested() → stop immediately (no drain, no render)
//   3. FramePacer::poll(elapsed); per due step:
//        InputState::refresh → Simulation::input → Simulation::update
//   4. ≥1 step ran → Simulation::render + Host::present, count frame
//      0 steps ran → bounded idle sleep
//   5. Every report interval → FrameRateSink::report_frames
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, error, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::{
    elapsed_seconds, Clock, ConfigError, FramePacer, FrameRateSink, Host, InputState, LogSink,
    LoopConfig, LoopError, MonotonicClock, Simulation, WindowSettings,
};

//=== LoopBuilder =========================================================

/// Builder for configuring and constructing a [`LoopController`].
///
/// # Default Values
///
/// - **TPS**: 5000.0 (fixed step of 0.2 ms)
/// - **Max steps per poll**: 250
/// - **Idle sleep**: 1 ms
/// - **Report interval**: 1 s, reported through [`LogSink`]
/// - **Window**: 800x600, "Cadence Engine"
///
/// # Examples
///
/// ```no_run
/// use cadence_engine::{LoopBuilder, WinitHost};
/// use cadence_engine::core::{InputState, Simulation};
///
/// struct Game;
/// impl Simulation for Game {
///     fn input(&mut self, _input: &InputState) {}
///     fn update(&mut self, _delta: f64) {}
///     fn render(&mut self) {}
/// }
///
/// let mut controller = LoopBuilder::new()
///     .with_tps(120.0)
///     .with_max_steps_per_poll(8)
///     .build(Game, WinitHost::new())?;
///
/// controller.start()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LoopBuilder<C = MonotonicClock> {
    config: LoopConfig,
    clock: C,
    sink: Box<dyn FrameRateSink>,
}

impl LoopBuilder<MonotonicClock> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: LoopConfig::default(),
            clock: MonotonicClock::new(),
            sink: Box::new(LogSink),
        }
    }
}

impl Default for LoopBuilder<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LoopBuilder<C> {
    //--- Pacing -----------------------------------------------------------

    /// Replaces the whole configuration (e.g. one loaded from TOML).
    pub fn with_config(mut self, config: LoopConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the simulation step length, in seconds.
    pub fn with_fixed_step(mut self, seconds: f64) -> Self {
        self.config.fixed_step = seconds;
        self
    }

    /// Sets the simulation rate in steps per second (`fixed_step = 1 / tps`).
    pub fn with_tps(mut self, tps: f64) -> Self {
        self.config.fixed_step = 1.0 / tps;
        self
    }

    /// Bounds the catch-up work done by a single loop iteration.
    pub fn with_max_steps_per_poll(mut self, max_steps: u32) -> Self {
        self.config.max_steps_per_poll = max_steps;
        self
    }

    /// Sets the wait used when no step was due. `Duration::ZERO` yields.
    pub fn with_idle_sleep(mut self, sleep: Duration) -> Self {
        self.config.idle_sleep_us = u64::try_from(sleep.as_micros()).unwrap_or(u64::MAX);
        self
    }

    /// Sets how often the frame count is reported.
    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.config.report_interval = interval.as_secs_f64();
        self
    }

    //--- Collaborators ----------------------------------------------------

    /// Sets the window the host opens on `start()`.
    pub fn with_window(mut self, window: WindowSettings) -> Self {
        self.config.window = window;
        self
    }

    /// Replaces the time source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> LoopBuilder<C2> {
        LoopBuilder {
            config: self.config,
            clock,
            sink: self.sink,
        }
    }

    /// Replaces the frame-rate sink.
    pub fn with_sink(mut self, sink: impl FrameRateSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    //--- Build ------------------------------------------------------------

    /// Validates the configuration and builds an idle controller.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`]; nothing is constructed in that case.
    pub fn build<S, H>(self, simulation: S, host: H) -> Result<LoopController<S, H, C>, ConfigError>
    where
        S: Simulation,
        H: Host,
    {
        self.config.validate()?;
        let pacer = FramePacer::new(self.config.fixed_step, self.config.max_steps_per_poll)?;

        debug!(
            "Building loop (step: {}s, max steps/poll: {}, idle sleep: {:?})",
            self.config.fixed_step,
            self.config.max_steps_per_poll,
            self.config.idle_sleep()
        );

        Ok(LoopController {
            simulation,
            host,
            clock: self.clock,
            sink: self.sink,
            input: InputState::new(),
            pacer,
            config: self.config,
            running: Arc::new(AtomicBool::new(false)),
        })
    }
}

//=== StopHandle ==========================================================

/// Cloneable handle to a controller's cooperative stop flag.
///
/// Hand one to the simulation (or another thread) to end the loop from
/// inside a hook. Takes effect at the next step boundary.
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    /// Requests the loop to stop. No-op when it is already idle.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            info!("Stop requested");
        } else {
            debug!("stop() ignored: loop is idle");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

//=== LoopController ======================================================

/// Fixed-timestep loop runtime.
///
/// Owns the clock, input state and pacer; drives an externally supplied
/// [`Simulation`] and [`Host`]. Create with [`LoopBuilder`].
///
/// State machine: `Idle → Running → Idle`, re-enterable.
pub struct LoopController<S, H, C = MonotonicClock> {
    simulation: S,
    host: H,
    clock: C,
    sink: Box<dyn FrameRateSink>,

    input: InputState,
    pacer: FramePacer,
    config: LoopConfig,
    running: Arc<AtomicBool>,
}

impl<S, H, C> LoopController<S, H, C>
where
    S: Simulation,
    H: Host,
    C: Clock,
{
    //--- Lifecycle --------------------------------------------------------

    /// Opens the host window and runs the loop until it goes idle again.
    ///
    /// No-op when already running. On return the host has been disposed
    /// exactly once (unless window creation itself failed).
    ///
    /// # Errors
    ///
    /// - [`LoopError::HostInit`] if the window cannot be created; the loop
    ///   never enters `Running`.
    /// - [`LoopError::CallbackFault`] if a simulation hook panicked.
    pub fn start(&mut self) -> Result<(), LoopError> {
        if self.is_running() {
            debug!("start() ignored: loop already running");
            return Ok(());
        }

        if let Err(e) = self.host.create_window(&self.config.window) {
            error!("Host initialization failed: {}", e);
            return Err(LoopError::HostInit(e));
        }

        info!(
            "Loop running ({} steps/s, max {} steps/poll)",
            1.0 / self.pacer.fixed_step(),
            self.pacer.max_steps_per_poll()
        );

        self.pacer.reset();
        self.input.clear();
        self.running.store(true, Ordering::SeqCst);

        let result = self.run();

        self.running.store(false, Ordering::SeqCst);
        self.host.dispose();
        info!("Loop stopped, host disposed");

        result
    }

    /// Requests the loop to stop at the next step boundary.
    ///
    /// No-op when already idle.
    pub fn stop(&self) {
        self.stop_handle().stop();
    }

    /// Handle that can stop this controller from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    //--- Accessors --------------------------------------------------------

    pub fn simulation(&self) -> &S {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.simulation
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Input snapshot as of the last processed step.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Gives back the simulation and host.
    pub fn into_parts(self) -> (S, H) {
        (self.simulation, self.host)
    }

    //--- Loop Body --------------------------------------------------------

    fn run(&mut self) -> Result<(), LoopError> {
        let delta = self.pacer.fixed_step();
        let idle_sleep = self.config.idle_sleep();
        let report_interval = self.config.report_interval;

        let mut last = self.clock.now();
        let mut frames: u32 = 0;
        let mut report_timer = 0.0;

        while self.is_running() {
            //--- Step 1: Measure elapsed time -----------------------------
            let now = self.clock.now();
            let elapsed = elapsed_seconds(last, now);
            last = now;
            report_timer += elapsed;

            //--- Step 2: Close request aborts immediately -----------------
            if self.host.is_close_requested() {
                info!("Host requested close");
                self.stop();
                break;
            }

            //--- Step 3: Drain due steps ----------------------------------
            self.pacer.poll(elapsed);
            let mut steps: u32 = 0;

            while self.is_running() && self.pacer.step_due() {
                self.input.refresh(&self.host);
                guard("input", || self.simulation.input(&self.input))?;
                guard("update", || self.simulation.update(delta))?;
                steps += 1;
            }

            trace!("Iteration: {:.6}s elapsed, {} steps", elapsed, steps);

            //--- Step 4: Render or idle -----------------------------------
            if steps > 0 {
                guard("render", || self.simulation.render())?;
                self.host.present();
                frames = frames.saturating_add(1);
            } else if idle_sleep.is_zero() {
                thread::yield_now();
            } else {
                thread::sleep(idle_sleep);
            }

            //--- Step 5: Frame-rate report --------------------------------
            if report_timer >= report_interval {
                self.sink.report_frames(frames);
                frames = 0;
                report_timer %= report_interval;
            }
        }

        Ok(())
    }
}

//=== Hook Guard ==========================================================

/// Runs a simulation hook, turning a panic into a callback fault.
fn guard(hook: &'static str, f: impl FnOnce()) -> Result<(), LoopError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        error!("Simulation `{}` hook panicked: {}", hook, message);
        LoopError::CallbackFault { hook, message }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChannelSink, HostError, KeyCode, ManualClock, RawInput};
    use crossbeam_channel::unbounded;
    use std::cell::Cell;

    //--- Test Helpers -----------------------------------------------------

    /// 1/32 s per clock read and 1/128 s per step: exactly 4 steps per
    /// iteration with nothing left over.
    const ITERATION: Duration = Duration::from_nanos(31_250_000);
    const STEP: f64 = 1.0 / 128.0;

    #[derive(Default)]
    struct CountingSim {
        calls: Vec<&'static str>,
        inputs: usize,
        updates: usize,
        renders: usize,
        deltas: Vec<f64>,
        up_pressed: Vec<bool>,
        panic_on_update: Option<usize>,
        stop_after_updates: Option<(usize, StopHandle)>,
    }

    impl Simulation for CountingSim {
        fn input(&mut self, input: &InputState) {
            self.calls.push("input");
            self.inputs += 1;
            self.up_pressed.push(input.is_key_just_pressed(KeyCode::ArrowUp));
        }

        fn update(&mut self, delta: f64) {
            self.calls.push("update");
            self.updates += 1;
            self.deltas.push(delta);

            if self.panic_on_update == Some(self.updates) {
                panic!("update {} exploded", self.updates);
            }
            if let Some((after, handle)) = &self.stop_after_updates {
                if self.updates == *after {
                    handle.stop();
                }
            }
        }

        fn render(&mut self) {
            self.calls.push("render");
            self.renders += 1;
        }
    }

    #[derive(Default)]
    struct StubHost {
        close_after_checks: usize,
        fail_create: bool,
        held_keys: Vec<u16>,

        creates: usize,
        close_checks: usize,
        presents: usize,
        disposes: usize,
        key_samples: Cell<usize>,
    }

    impl StubHost {
        fn closing_after(checks: usize) -> Self {
            Self {
                close_after_checks: checks,
                ..Default::default()
            }
        }
    }

    impl RawInput for StubHost {
        fn is_key_active(&self, code: u16) -> bool {
            if code == 0 {
                self.key_samples.set(self.key_samples.get() + 1);
            }
            self.held_keys.contains(&code)
        }

        fn is_button_active(&self, _code: u16) -> bool {
            false
        }

        fn pointer_position(&self) -> (f32, f32) {
            (0.0, 0.0)
        }
    }

    impl Host for StubHost {
        fn create_window(&mut self, _settings: &WindowSettings) -> Result<(), HostError> {
            if self.fail_create {
                return Err(HostError::WindowCreation("no display".into()));
            }
            self.creates += 1;
            Ok(())
        }

        fn is_close_requested(&mut self) -> bool {
            self.close_checks += 1;
            self.close_checks > self.close_after_checks
        }

        fn present(&mut self) {
            self.presents += 1;
        }

        fn dispose(&mut self) {
            self.disposes += 1;
        }
    }

    fn test_builder() -> LoopBuilder<ManualClock> {
        LoopBuilder::new()
            .with_fixed_step(STEP)
            .with_max_steps_per_poll(8)
            .with_idle_sleep(Duration::ZERO)
            .with_sink(crate::core::NullSink)
            .with_clock(ManualClock::auto_advance(ITERATION))
    }

    //=====================================================================
    // LoopBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = LoopBuilder::new();
        assert_eq!(builder.config, LoopConfig::default());
    }

    #[test]
    fn builder_with_tps() {
        let builder = LoopBuilder::new().with_tps(120.0);
        assert!((builder.config.fixed_step - 1.0 / 120.0).abs() < 1e-12);
    }

    #[test]
    fn builder_rejects_zero_tps() {
        let result = LoopBuilder::new()
            .with_tps(0.0)
            .build(CountingSim::default(), StubHost::default());
        assert!(matches!(result, Err(ConfigError::NonPositiveFixedStep(_))));
    }

    #[test]
    fn builder_rejects_negative_fixed_step() {
        let result = LoopBuilder::new()
            .with_fixed_step(-0.01)
            .build(CountingSim::default(), StubHost::default());
        assert!(matches!(result, Err(ConfigError::NonPositiveFixedStep(_))));
    }

    #[test]
    fn builder_rejects_zero_max_steps() {
        let result = LoopBuilder::new()
            .with_max_steps_per_poll(0)
            .build(CountingSim::default(), StubHost::default());
        assert!(matches!(result, Err(ConfigError::ZeroMaxSteps)));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let controller = LoopBuilder::new()
            .with_tps(60.0)
            .with_max_steps_per_poll(5)
            .with_idle_sleep(Duration::from_micros(500))
            .with_report_interval(Duration::from_secs(2))
            .with_window(WindowSettings::new(320, 240, "tiny"))
            .build(CountingSim::default(), StubHost::default())
            .unwrap();

        assert!(!controller.is_running());
        assert_eq!(controller.pacer().max_steps_per_poll(), 5);
        assert_eq!(controller.config().idle_sleep_us, 500);
        assert_eq!(controller.config().report_interval, 2.0);
        assert_eq!(controller.config().window.title(), "tiny");
    }

    //=====================================================================
    // Lifecycle Tests
    //=====================================================================

    #[test]
    fn runs_until_close_then_disposes_once() {
        let mut controller = test_builder()
            .build(CountingSim::default(), StubHost::closing_after(3))
            .unwrap();

        controller.start().unwrap();

        let (sim, host) = controller.into_parts();
        assert_eq!(sim.updates, 12);
        assert_eq!(sim.inputs, 12);
        assert_eq!(sim.renders, 3);
        assert!(sim.renders <= sim.updates);
        assert_eq!(host.creates, 1);
        assert_eq!(host.presents, 3);
        assert_eq!(host.disposes, 1);
    }

    #[test]
    fn hooks_run_in_order() {
        let mut controller = test_builder()
            .build(CountingSim::default(), StubHost::closing_after(1))
            .unwrap();

        controller.start().unwrap();

        assert_eq!(
            controller.simulation().calls,
            vec!["input", "update", "input", "update", "input", "update", "input", "update", "render"]
        );
    }

    #[test]
    fn update_receives_fixed_delta() {
        let mut controller = test_builder()
            .build(CountingSim::default(), StubHost::closing_after(2))
            .unwrap();

        controller.start().unwrap();

        assert!(controller.simulation().deltas.iter().all(|&d| d == STEP));
    }

    #[test]
    fn close_on_first_check_aborts_without_stepping() {
        let mut controller = test_builder()
            .build(CountingSim::default(), StubHost::closing_after(0))
            .unwrap();

        controller.start().unwrap();

        assert!(!controller.is_running());
        assert_eq!(controller.simulation().updates, 0);
        assert_eq!(controller.simulation().renders, 0);
        assert_eq!(controller.host().creates, 1);
        assert_eq!(controller.host().disposes, 1);
    }

    #[test]
    fn no_render_when_no_step_is_due() {
        let mut controller = test_builder()
            .with_clock(ManualClock::new())
            .build(CountingSim::default(), StubHost::closing_after(5))
            .unwrap();

        controller.start().unwrap();

        assert_eq!(controller.simulation().updates, 0);
        assert_eq!(controller.simulation().renders, 0);
        assert_eq!(controller.host().presents, 0);
        assert_eq!(controller.host().disposes, 1);
    }

    #[test]
    fn catch_up_is_capped_per_iteration() {
        // 1/32 s per iteration but at most 2 steps of 1/128 s each
        let mut controller = test_builder()
            .with_max_steps_per_poll(2)
            .build(CountingSim::default(), StubHost::closing_after(3))
            .unwrap();

        controller.start().unwrap();

        assert_eq!(controller.simulation().updates, 6);
        assert_eq!(controller.simulation().renders, 3);
    }

    #[test]
    fn host_init_failure_never_enters_running() {
        let host = StubHost {
            fail_create: true,
            ..Default::default()
        };
        let mut controller = test_builder().build(CountingSim::default(), host).unwrap();

        let err = controller.start().unwrap_err();

        assert!(matches!(err, LoopError::HostInit(HostError::WindowCreation(_))));
        assert!(!controller.is_running());
        assert_eq!(controller.host().disposes, 0);
        assert!(controller.simulation().calls.is_empty());
    }

    #[test]
    fn restart_after_stop_is_allowed() {
        let mut controller = test_builder()
            .build(CountingSim::default(), StubHost::closing_after(1))
            .unwrap();

        controller.start().unwrap();
        controller.host_mut().close_checks = 0;
        controller.start().unwrap();

        assert_eq!(controller.host().creates, 2);
        assert_eq!(controller.host().disposes, 2);
        assert_eq!(controller.simulation().renders, 2);
    }

    #[test]
    fn stop_while_idle_is_noop() {
        let controller = test_builder()
            .build(CountingSim::default(), StubHost::default())
            .unwrap();

        controller.stop();
        controller.stop_handle().stop();

        assert!(!controller.is_running());
    }

    //=====================================================================
    // Stop & Fault Tests
    //=====================================================================

    #[test]
    fn stop_from_hook_takes_effect_at_step_boundary() {
        let mut controller = test_builder()
            .build(CountingSim::default(), StubHost::closing_after(usize::MAX))
            .unwrap();
        let handle = controller.stop_handle();
        controller.simulation_mut().stop_after_updates = Some((2, handle));

        controller.start().unwrap();

        let sim = controller.simulation();
        assert_eq!(sim.updates, 2);
        assert_eq!(sim.renders, 1);
        assert_eq!(controller.host().disposes, 1);
        assert!(!controller.is_running());
    }

    #[test]
    fn panicking_hook_stops_loop_and_cleans_up() {
        let sim = CountingSim {
            panic_on_update: Some(3),
            ..Default::default()
        };
        let mut controller = test_builder()
            .build(sim, StubHost::closing_after(usize::MAX))
            .unwrap();

        let err = controller.start().unwrap_err();

        match err {
            LoopError::CallbackFault { hook, message } => {
                assert_eq!(hook, "update");
                assert!(message.contains("update 3 exploded"));
            }
            other => panic!("Expected CallbackFault, got {:?}", other),
        }
        assert!(!controller.is_running());
        assert_eq!(controller.simulation().renders, 0);
        assert_eq!(controller.host().disposes, 1);
    }

    //=====================================================================
    // Input Tests
    //=====================================================================

    #[test]
    fn input_refreshed_once_per_step() {
        let host = StubHost {
            close_after_checks: 2,
            held_keys: vec![KeyCode::ArrowUp.code()],
            ..Default::default()
        };
        let mut controller = test_builder().build(CountingSim::default(), host).unwrap();

        controller.start().unwrap();

        assert_eq!(controller.host().key_samples.get(), 8);
        assert_eq!(
            controller.simulation().up_pressed,
            vec![true, false, false, false, false, false, false, false]
        );
        assert!(controller.input().is_key_down(KeyCode::ArrowUp));
    }

    #[test]
    fn restart_reports_held_key_as_pressed_again() {
        let host = StubHost {
            close_after_checks: 1,
            held_keys: vec![KeyCode::ArrowUp.code()],
            ..Default::default()
        };
        let mut controller = test_builder().build(CountingSim::default(), host).unwrap();

        controller.start().unwrap();
        controller.host_mut().close_checks = 0;
        controller.start().unwrap();

        assert_eq!(
            controller.simulation().up_pressed,
            vec![true, false, false, false, true, false, false, false]
        );
    }

    //=====================================================================
    // Idle Tests
    //=====================================================================

    #[test]
    fn idle_iterations_sleep_without_rendering() {
        let mut controller = test_builder()
            .with_idle_sleep(Duration::from_micros(100))
            .with_clock(ManualClock::new())
            .build(CountingSim::default(), StubHost::closing_after(3))
            .unwrap();

        controller.start().unwrap();

        assert_eq!(controller.host().close_checks, 4);
        assert_eq!(controller.simulation().updates, 0);
        assert_eq!(controller.host().presents, 0);
    }

    #[test]
    fn builder_rejects_long_idle_sleep() {
        let result = LoopBuilder::new()
            .with_idle_sleep(Duration::from_millis(50))
            .build(CountingSim::default(), StubHost::default());
        assert!(matches!(
            result,
            Err(ConfigError::IdleSleepTooLong { micros: 50_000 })
        ));
    }

    //=====================================================================
    // Observability Tests
    //=====================================================================

    #[test]
    fn frame_count_reported_each_interval() {
        let (tx, rx) = unbounded();
        let mut controller = test_builder()
            .with_report_interval(Duration::from_nanos(62_500_000))
            .with_sink(ChannelSink::new(tx))
            .build(CountingSim::default(), StubHost::closing_after(4))
            .unwrap();

        controller.start().unwrap();

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![2, 2]);
    }

    //=====================================================================
    // Panic Message Tests
    //=====================================================================

    #[test]
    fn panic_message_handles_payload_kinds() {
        let s: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");

        let s: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(s.as_ref()), "owned");

        let s: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(s.as_ref()), "non-string panic payload");
    }
}
