//! Data-driven game balance
//!
//! Physics constants, spawn rules and the per-level entity counts. Loaded
//! from JSON when available, otherwise the built-in defaults are used.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::geometry::Rect;

/// Axis-aligned spawn region: candidates are drawn from `origin + [0, span)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub origin: Vec2,
    pub span: Vec2,
}

impl SpawnArea {
    pub fn new(origin: Vec2, span: Vec2) -> Self {
        Self {
            origin,
            span: span.max(Vec2::ZERO),
        }
    }

    /// Map unit coordinates in `[0, 1)` to a point in the area
    #[inline]
    pub fn point_at(&self, u: f32, v: f32) -> Vec2 {
        self.origin + self.span * Vec2::new(u, v)
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,
    pub ground_height: f32,

    pub player_size: f32,
    pub pickup_size: f32,
    pub obstacle_size: f32,
    pub goal_size: f32,

    pub spawn_x: f32,
    pub goal_margin: f32,

    /// Horizontal speed per reference tick
    pub move_speed: f32,
    /// Downward acceleration per reference tick
    pub gravity: f32,
    /// Upward speed given by a jump
    pub jump_force: f32,
    /// Max distance from the resting height that still counts as grounded
    pub ground_epsilon: f32,

    pub pickup_score: u64,
    pub starting_lives: u8,

    /// Pickups keep this far from the left/top edges
    pub pickup_margin: f32,
    /// Extra room kept free below the pickup area, above the ground band
    pub pickup_floor_margin: f32,
    /// Obstacles keep this far from the left/right edges
    pub obstacle_margin: f32,
    /// Minimum horizontal distance between an obstacle and the player/goal
    pub obstacle_clearance: f32,
    /// Random draws per entity before falling back to a grid scan
    pub max_placement_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            player_size: PLAYER_SIZE,
            pickup_size: PICKUP_SIZE,
            obstacle_size: OBSTACLE_SIZE,
            goal_size: GOAL_SIZE,

            spawn_x: SPAWN_X,
            goal_margin: GOAL_MARGIN,

            move_speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            ground_epsilon: 5.0,

            pickup_score: PICKUP_SCORE,
            starting_lives: STARTING_LIVES,

            pickup_margin: 50.0,
            pickup_floor_margin: 50.0,
            obstacle_margin: 100.0,
            obstacle_clearance: 100.0,
            max_placement_attempts: 1_000,
        }
    }
}

impl Tuning {
    /// Top edge of the ground band
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.world_height - self.ground_height
    }

    /// Resting y of the player (top edge while standing on the ground)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_top() - self.player_size
    }

    /// Highest point the player may reach: halfway up the sky
    #[inline]
    pub fn min_jump_y(&self) -> f32 {
        self.ground_top() - self.ground_top() / 2.0
    }

    /// Largest x that keeps the player inside the world
    #[inline]
    pub fn max_player_x(&self) -> f32 {
        (self.world_width - self.player_size).max(0.0)
    }

    pub fn spawn(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.ground_y())
    }

    /// Goal box, resting on the ground near the right edge
    pub fn goal_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(
                self.world_width - self.goal_size - self.goal_margin,
                self.ground_top() - self.goal_size,
            ),
            Vec2::splat(self.goal_size),
        )
    }

    /// Where pickups may appear
    pub fn pickup_area(&self) -> SpawnArea {
        let m = self.pickup_margin;
        SpawnArea::new(
            Vec2::splat(m),
            Vec2::new(
                self.world_width - self.pickup_size - 2.0 * m,
                self.world_height - self.pickup_size - self.ground_height - self.pickup_floor_margin,
            ),
        )
    }

    /// Where obstacles may appear: a horizontal strip on top of the ground
    pub fn obstacle_area(&self) -> SpawnArea {
        let m = self.obstacle_margin;
        SpawnArea::new(
            Vec2::new(m, self.ground_top() - self.obstacle_size),
            Vec2::new(self.world_width - self.obstacle_size - 2.0 * m, 0.0),
        )
    }
}

/// Entity counts for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub pickups: u32,
    pub obstacles: u32,
}

impl LevelSpec {
    /// Used for any level past the end of the table
    pub const FALLBACK: LevelSpec = LevelSpec {
        pickups: 3,
        obstacles: 2,
    };

    pub const fn new(pickups: u32, obstacles: u32) -> Self {
        Self { pickups, obstacles }
    }
}

/// Ordered level table, looked up by 1-based level number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    levels: Vec<LevelSpec>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new(vec![
            LevelSpec::new(3, 2),
            LevelSpec::new(5, 4),
            LevelSpec::new(7, 6),
        ])
    }
}

impl LevelTable {
    pub fn new(levels: Vec<LevelSpec>) -> Self {
        Self { levels }
    }

    /// Counts for `level` (1-based); levels outside the table get the fallback
    pub fn for_level(&self, level: u32) -> LevelSpec {
        level
            .checked_sub(1)
            .and_then(|i| self.levels.get(i as usize))
            .copied()
            .unwrap_or(LevelSpec::FALLBACK)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Everything a session needs that is not per-session state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub levels: LevelTable,
}

impl GameConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load config from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
