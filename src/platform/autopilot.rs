//! Scripted input for headless runs
//!
//! Walks toward the goal and jumps when the next obstacle comes close.

use crate::sim::{GameState, TickInput};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Jump when the gap to the next obstacle is at most this wide
    pub jump_window: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { jump_window: 40.0 }
    }
}

impl Autopilot {
    /// Horizontal gap between the player's right edge and the nearest
    /// obstacle still ahead of it
    pub fn gap_to_next_obstacle(state: &GameState) -> Option<f32> {
        let front = state.player.rect().right();
        state
            .obstacles
            .iter()
            .map(|o| o.rect.pos.x - front)
            .filter(|gap| *gap >= 0.0)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl super::InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        let jump = !state.player.jumping
            && Self::gap_to_next_obstacle(state).is_some_and(|gap| gap <= self.jump_window);
        TickInput {
            left: false,
            right: true,
            jump,
        }
    }
}
