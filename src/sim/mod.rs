//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity index / ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod lifecycle;
pub mod physics;
pub mod placement;
pub mod state;
pub mod tick;

pub use collision::{obstacle_hit, resolve, touched_pickups};
pub use geometry::{Rect, overlaps};
pub use lifecycle::Command;
pub use physics::{Steer, jump, step};
pub use placement::{SpawnRule, place_obstacles, place_pickups};
pub use state::{GameEvent, GamePhase, GameState, Goal, Obstacle, Pickup, Player};
pub use tick::{TickInput, tick};
