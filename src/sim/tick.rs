//! Simulation tick
//!
//! One tick = physics step, then collision resolution. Nothing advances
//! unless the session is running.

use serde::{Deserialize, Serialize};

use super::collision;
use super::physics::{self, Steer};
use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Jump pressed since the previous tick (edge-triggered)
    pub jump: bool,
}

impl TickInput {
    pub fn steer(&self) -> Steer {
        Steer::from_keys(self.left, self.right)
    }
}

/// Advance the game state by one timestep of length `dt`
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;

    if input.jump {
        physics::jump(&mut state.player, state.tuning.jump_force);
    }
    physics::step(&mut state.player, input.steer(), &state.tuning, dt);

    collision::resolve(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::GamePhase;
    use crate::tuning::GameConfig;

    fn walk_right() -> TickInput {
        TickInput {
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_does_not_move() {
        let mut state = GameState::new(12345, GameConfig::default());
        let before = state.player.clone();
        tick(&mut state, &walk_right(), SIM_DT);
        assert_eq!(state.player, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_paused_does_not_move() {
        let mut state = GameState::new(12345, GameConfig::default());
        state.start();
        state.pause();
        let before = state.player.clone();
        tick(&mut state, &walk_right(), SIM_DT);
        assert_eq!(state.player, before);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_running_moves_player() {
        let mut state = GameState::new(12345, GameConfig::default());
        state.obstacles.clear();
        state.start();
        tick(&mut state, &walk_right(), SIM_DT);
        assert_eq!(state.player.pos.x, 55.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_jump_input() {
        let mut state = GameState::new(12345, GameConfig::default());
        state.start();
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.player.jumping);
        assert_eq!(state.player.pos.y, 425.5);
    }

    #[test]
    fn test_walk_to_goal_without_obstacles() {
        let mut state = GameState::new(12345, GameConfig::default());
        state.obstacles.clear();
        state.start();
        for _ in 0..200 {
            tick(&mut state, &walk_right(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::LevelComplete);
        // Frozen once complete
        let x = state.player.pos.x;
        tick(&mut state, &walk_right(), SIM_DT);
        assert_eq!(state.player.pos.x, x);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, GameConfig::default());
        let mut state2 = GameState::new(99999, GameConfig::default());
        state1.start();
        state2.start();

        let inputs = [
            walk_right(),
            TickInput {
                jump: true,
                right: true,
                ..Default::default()
            },
            walk_right(),
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..30 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.phase, state2.phase);
    }
}
