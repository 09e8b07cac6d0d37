//! Platform abstraction layer
//!
//! Input sources that feed the simulation one `TickInput` per tick:
//! - `Keyboard`: held-key state from key events, with edge-triggered jump
//! - `Autopilot`: scripted play for headless runs and demos

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{InputSource, Keyboard};
