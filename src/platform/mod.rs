//! Platform glue around the simulation
//!
//! - `input`: key names to steering intents and session commands
//! - `driver`: frame scheduler that ticks, plays cues and presents
//! - `autopilot`: simple bot for headless runs

pub mod autopilot;
pub mod driver;
pub mod input;

pub use driver::{FrameDriver, FrameOutcome};
pub use input::{Command, InputState, Key};
