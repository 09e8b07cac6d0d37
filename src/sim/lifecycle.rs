//! Level lifecycle
//!
//! Phase transitions driven by the five lifecycle commands, plus the two
//! transitions the collision pass triggers (game over, level complete).
//!
//! ```text
//! Idle ──start──▶ Running ◀──pause──▶ Paused
//!                  │    │
//!         lives=0  │    │ goal
//!                  ▼    ▼
//!           GameOver    LevelComplete ──next_level / replay──▶ Idle
//! ```
//! `reset` returns to Idle from anywhere.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::placement::{SpawnRule, place_obstacles, place_pickups};
use super::state::{GameEvent, GamePhase, GameState, Obstacle, Pickup};

/// Externally triggered lifecycle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Pause,
    Reset,
    NextLevel,
    Replay,
}

impl GameState {
    /// Dispatch a lifecycle command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Reset => self.reset(),
            Command::NextLevel => self.next_level(),
            Command::Replay => self.replay(),
        }
    }

    /// Enter (or resume) play without touching the level or counters
    pub fn start(&mut self) {
        log::info!("Start level {} from {:?}", self.level, self.phase);
        self.set_phase(GamePhase::Running);
    }

    /// Toggle between running and paused; ignored in any other phase
    pub fn pause(&mut self) {
        match self.phase {
            GamePhase::Running => self.set_phase(GamePhase::Paused),
            GamePhase::Paused => self.set_phase(GamePhase::Running),
            _ => {}
        }
    }

    /// Back to level 1 with a fresh score and full lives
    pub fn reset(&mut self) {
        log::info!("Reset session (score was {})", self.score);
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.level = 1;
        self.set_phase(GamePhase::Idle);
        self.init_level();
    }

    /// Advance to the next level, keeping score and lives
    pub fn next_level(&mut self) {
        if self.phase != GamePhase::LevelComplete {
            log::debug!("Advancing level from {:?}", self.phase);
        }
        self.level += 1;
        self.set_phase(GamePhase::Idle);
        self.init_level();
    }

    /// Regenerate the current level, keeping score and lives
    ///
    /// Lives are not restored, so replaying after a game over leaves the
    /// session at zero lives.
    pub fn replay(&mut self) {
        self.set_phase(GamePhase::Idle);
        self.init_level();
    }

    /// Respawn the player and lay out a fresh set of entities for `self.level`
    pub fn init_level(&mut self) {
        let spawn = self.tuning.spawn();
        self.player.respawn(spawn);
        self.pickups.clear();
        self.obstacles.clear();

        let counts = self.levels.for_level(self.level);
        let mut rng = self.layout_rng();
        let t = &self.tuning;

        let pickup_rule = SpawnRule {
            area: t.pickup_area(),
            size: t.pickup_size,
            max_attempts: t.max_placement_attempts,
        };
        let obstacle_rule = SpawnRule {
            area: t.obstacle_area(),
            size: t.obstacle_size,
            max_attempts: t.max_placement_attempts,
        };

        // Pickups go first, so they only see obstacles already on the field
        let placed: Vec<Rect> = self.obstacles.iter().map(|o| o.rect).collect();
        let pickup_rects = place_pickups(
            &mut rng,
            counts.pickups,
            &pickup_rule,
            &placed,
            &self.goal.rect,
        );
        let obstacle_rects = place_obstacles(
            &mut rng,
            counts.obstacles,
            &obstacle_rule,
            self.player.pos.x,
            self.goal.rect.pos.x,
            t.obstacle_clearance,
        );

        for rect in pickup_rects {
            let id = self.next_entity_id();
            self.pickups.push(Pickup {
                id,
                rect,
                collected: false,
            });
        }
        for rect in obstacle_rects {
            let id = self.next_entity_id();
            self.obstacles.push(Obstacle { id, rect });
        }

        log::info!(
            "Level {}: {} pickups, {} obstacles",
            self.level,
            self.pickups.len(),
            self.obstacles.len()
        );
        self.emit(GameEvent::LevelLoaded { level: self.level });
    }

    pub(crate) fn finish_game_over(&mut self) {
        log::info!("Game over on level {} with score {}", self.level, self.score);
        self.set_phase(GamePhase::GameOver);
        self.emit(GameEvent::GameOver {
            score: self.score,
            level: self.level,
        });
    }

    pub(crate) fn finish_level(&mut self) {
        log::info!("Level {} complete with score {}", self.level, self.score);
        self.set_phase(GamePhase::LevelComplete);
        self.emit(GameEvent::LevelComplete {
            score: self.score,
            level: self.level,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::GameConfig;

    fn new_state() -> GameState {
        GameState::new(42, GameConfig::default())
    }

    #[test]
    fn test_start_from_idle() {
        let mut state = new_state();
        state.apply(Command::Start);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_toggles() {
        let mut state = new_state();
        state.pause();
        assert_eq!(state.phase, GamePhase::Idle);

        state.start();
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.pause();
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_ignored_after_level_complete() {
        let mut state = new_state();
        state.start();
        state.finish_level();
        state.pause();
        assert_eq!(state.phase, GamePhase::LevelComplete);
    }

    #[test]
    fn test_start_resumes_without_regenerating() {
        let mut state = new_state();
        state.start();
        state.pause();
        let pickups = state.pickups.clone();
        state.player.pos.x = 300.0;
        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.pickups, pickups);
        assert_eq!(state.player.pos.x, 300.0);
    }

    #[test]
    fn test_start_after_game_over() {
        let mut state = new_state();
        state.start();
        state.lives = 0;
        state.finish_game_over();
        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_reset_zeroes_session() {
        let mut state = new_state();
        state.start();
        state.score = 120;
        state.lives = 1;
        state.level = 3;
        state.reset();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.pickups.len(), 3);
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_next_level_keeps_score_and_lives() {
        let mut state = new_state();
        state.start();
        state.score = 30;
        state.lives = 2;
        state.finish_level();
        state.apply(Command::NextLevel);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 30);
        assert_eq!(state.lives, 2);
        assert_eq!(state.pickups.len(), 5);
        assert_eq!(state.obstacles.len(), 4);
    }

    #[test]
    fn test_levels_past_table_use_fallback() {
        let mut state = new_state();
        state.level = 3;
        state.next_level();
        assert_eq!(state.level, 4);
        assert_eq!(state.pickups.len(), 3);
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_replay_regenerates_same_level() {
        let mut state = new_state();
        state.start();
        state.score = 20;
        state.pickups[0].collected = true;
        state.player.pos.x = 400.0;
        let before: Vec<_> = state.pickups.iter().map(|p| p.rect).collect();
        state.finish_level();

        state.replay();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 20);
        assert_eq!(state.player.pos, state.tuning.spawn());
        assert!(state.pickups.iter().all(|p| !p.collected));
        // Each layout draws from a fresh seed, so the positions move
        let after: Vec<_> = state.pickups.iter().map(|p| p.rect).collect();
        assert_eq!(after.len(), before.len());
        assert_ne!(after, before);
    }

    #[test]
    fn test_init_level_emits_event() {
        let mut state = new_state();
        state.drain_events();
        state.init_level();
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LevelLoaded { level: 1 }]
        );
    }
}
