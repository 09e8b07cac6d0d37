//! Apple Hop - A single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level lifecycle)
//! - `tuning`: Data-driven game balance and level table
//! - `platform`: Input sources (keyboard bindings, autopilot)
//! - `ui`: Render/UI sink contracts, HUD and overlays
//! - `app`: Frame driver tying input, simulation and sinks together

pub mod app;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::App;
pub use tuning::{GameConfig, LevelSpec, LevelTable, Tuning};

/// Game configuration constants
pub mod consts {
    /// Reference simulation timestep (one display frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Height of the ground band at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Entity sizes (all square)
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PICKUP_SIZE: f32 = 30.0;
    pub const OBSTACLE_SIZE: f32 = 40.0;
    pub const GOAL_SIZE: f32 = 60.0;

    /// Player spawn x
    pub const SPAWN_X: f32 = 50.0;
    /// Gap between the goal and the right edge of the world
    pub const GOAL_MARGIN: f32 = 50.0;

    /// Movement, per reference tick
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_FORCE: f32 = 25.0;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const PICKUP_SCORE: u64 = 10;
}
