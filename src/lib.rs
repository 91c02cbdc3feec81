//=========================================================================
// Cadence Engine - Library Root
//
// This crate defines the public API surface of the Cadence Engine.
//
// Responsibilities:
// - Expose the loop runtime (`LoopBuilder`, `LoopController`)
// - Expose the winit-backed host (`WinitHost`) while keeping its
//   internals private
// - Keep the host-independent building blocks in `core`
//
// Typical usage:
// ```no_run
// use cadence_engine::prelude::*;
//
// struct Game;
// impl Simulation for Game {
//     fn input(&mut self, _input: &InputState) {}
//     fn update(&mut self, _delta: f64) {}
//     fn render(&mut self) {}
// }
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     let mut controller = LoopBuilder::new().build(Game, WinitHost::new())?;
//     controller.start()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the clock, pacer, input tracking and the collaborator
// contracts (`Simulation`, `Host`, `RawInput`). It is public so custom
// hosts and tests can be written against it.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit integration and is kept private; only
// `WinitHost` is exported.
//
// `engine` defines the loop runtime and its builder.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{LoopBuilder, LoopController, StopHandle};
pub use platform::WinitHost;
