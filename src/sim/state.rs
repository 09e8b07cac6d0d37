//! Game state and core simulation types
//!
//! The whole session lives in one owned `GameState`; every subsystem takes it
//! (or the pieces it needs) by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::tuning::{GameConfig, LevelTable, Tuning};

/// Lifecycle phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Never started, or waiting after reset / level change
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Suspended by the player
    Paused,
    /// Out of lives
    GameOver,
    /// Goal reached
    LevelComplete,
}

/// Something that happened during a tick or a lifecycle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupCollected { pickup_id: u32, score: u64 },
    LifeLost { lives: u8 },
    GameOver { score: u64, level: u32 },
    LevelComplete { score: u64, level: u32 },
    LevelLoaded { level: u32 },
    PhaseChanged { phase: GamePhase },
}

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Velocity per reference tick
    pub vel: Vec2,
    /// Airborne after a jump, cleared on landing
    pub jumping: bool,
}

impl Player {
    pub fn new(spawn: Vec2, size: f32) -> Self {
        Self {
            pos: spawn,
            size: Vec2::splat(size),
            vel: Vec2::ZERO,
            jumping: false,
        }
    }

    /// Put the player back at `spawn`, at rest
    pub fn respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.jumping = false;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// On the ground and not mid-jump
    pub fn is_grounded(&self, ground_y: f32, epsilon: f32) -> bool {
        !self.jumping && (self.pos.y - ground_y).abs() < epsilon
    }
}

/// A collectible apple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub rect: Rect,
    /// Once set, never cleared for the rest of the level
    pub collected: bool,
}

/// A roadblock standing on the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
}

/// The house; touching it finishes the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub rect: Rect,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducible layouts
    pub seed: u64,
    /// Number of layouts generated so far (mixed into each layout's RNG)
    pub layouts_generated: u64,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u8,
    pub score: u64,
    /// Simulation ticks advanced while running
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Pickups for the level; collected ones stay as tombstones
    pub pickups: Vec<Pickup>,
    pub obstacles: Vec<Obstacle>,
    pub goal: Goal,
    pub tuning: Tuning,
    pub levels: LevelTable,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new idle session at level 1 with its layout generated
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let GameConfig { tuning, levels } = config;
        let mut state = Self {
            seed,
            layouts_generated: 0,
            level: 1,
            lives: tuning.starting_lives,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Idle,
            player: Player::new(tuning.spawn(), tuning.player_size),
            pickups: Vec::new(),
            obstacles: Vec::new(),
            goal: Goal {
                rect: tuning.goal_rect(),
            },
            tuning,
            levels,
            events: Vec::new(),
            next_id: 1,
        };

        state.init_level();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// RNG for the next layout, derived from the seed and layout counter
    pub(crate) fn layout_rng(&mut self) -> Pcg32 {
        let layout_seed = self
            .layouts_generated
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        self.layouts_generated += 1;
        Pcg32::seed_from_u64(layout_seed)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn remaining_pickups(&self) -> usize {
        self.pickups.iter().filter(|p| !p.collected).count()
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        log::debug!("{:?}", event);
        self.events.push(event);
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            self.phase = phase;
            self.emit(GameEvent::PhaseChanged { phase });
        }
    }
}
