//! Player physics integration
//!
//! Constant-speed horizontal movement, gravity, and a single jump impulse.
//! Speeds are expressed per reference tick (`SIM_DT`); other tick lengths
//! scale them linearly.

use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::SIM_DT;
use crate::tuning::Tuning;

/// Horizontal intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    #[default]
    None,
    Left,
    Right,
}

impl Steer {
    /// Left wins when both directions are held
    pub fn from_keys(left: bool, right: bool) -> Self {
        if left {
            Steer::Left
        } else if right {
            Steer::Right
        } else {
            Steer::None
        }
    }

    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Steer::None => 0.0,
            Steer::Left => -1.0,
            Steer::Right => 1.0,
        }
    }
}

/// Start a jump unless already airborne
pub fn jump(player: &mut Player, jump_force: f32) {
    if !player.jumping {
        player.vel.y = -jump_force;
        player.jumping = true;
    }
}

/// Advance the player by one tick of length `dt`
pub fn step(player: &mut Player, steer: Steer, tuning: &Tuning, dt: f32) {
    let k = dt / SIM_DT;

    player.vel.x = steer.sign() * tuning.move_speed;
    // Gravity applies even when standing; the ground clamp below cancels it
    player.vel.y += tuning.gravity * k;

    player.pos += player.vel * k;

    player.pos.x = player.pos.x.clamp(0.0, tuning.max_player_x());

    let ground_y = tuning.ground_y();
    let min_y = tuning.min_jump_y();
    if player.pos.y < min_y {
        // Cap the ascent but keep any downward speed
        player.pos.y = min_y;
        if player.vel.y < 0.0 {
            player.vel.y = 0.0;
        }
    } else if player.pos.y > ground_y {
        player.pos.y = ground_y;
        player.vel.y = 0.0;
        player.jumping = false;
    }
}
