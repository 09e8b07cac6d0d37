//! Collision detection and response
//!
//! Each running tick checks the player against pickups, then obstacles, then
//! the goal. The order matters: an obstacle hit that ends the game in the same
//! tick as the player touches the goal counts as a game over.

use super::geometry::Rect;
use super::state::{GameEvent, GameState, Obstacle, Pickup, Player};
use crate::tuning::Tuning;

/// Indices of uncollected pickups overlapping `player`, highest index first
pub fn touched_pickups(player: &Rect, pickups: &[Pickup]) -> Vec<usize> {
    pickups
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, p)| !p.collected && player.overlaps(&p.rect))
        .map(|(i, _)| i)
        .collect()
}

/// First obstacle the player runs into while on the ground
///
/// An airborne player (or one still within the jump) passes over obstacles
/// even when the boxes overlap.
pub fn obstacle_hit<'a>(
    player: &Player,
    obstacles: &'a [Obstacle],
    tuning: &Tuning,
) -> Option<&'a Obstacle> {
    if !player.is_grounded(tuning.ground_y(), tuning.ground_epsilon) {
        return None;
    }
    let rect = player.rect();
    obstacles.iter().find(|o| rect.overlaps(&o.rect))
}

/// Resolve all collisions for the current tick
pub fn resolve(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    // Pickups
    let player_rect = state.player.rect();
    for i in touched_pickups(&player_rect, &state.pickups) {
        let pickup = &mut state.pickups[i];
        pickup.collected = true;
        let pickup_id = pickup.id;
        state.score += state.tuning.pickup_score;
        state.emit(GameEvent::PickupCollected {
            pickup_id,
            score: state.score,
        });
    }

    // Obstacles: first hit only
    let hit = obstacle_hit(&state.player, &state.obstacles, &state.tuning).map(|o| o.id);
    if let Some(obstacle_id) = hit {
        state.lives = state.lives.saturating_sub(1);
        log::info!("Hit obstacle {}, lives left: {}", obstacle_id, state.lives);
        state.emit(GameEvent::LifeLost { lives: state.lives });

        if state.lives == 0 {
            state.finish_game_over();
        } else {
            let spawn = state.tuning.spawn();
            state.player.respawn(spawn);
        }
    }

    // Goal
    if state.is_running() && state.player.rect().overlaps(&state.goal.rect) {
        state.finish_level();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::tuning::GameConfig;
    use glam::Vec2;

    /// Running session with an empty level
    fn running_state() -> GameState {
        let mut state = GameState::new(1, GameConfig::default());
        state.pickups.clear();
        state.obstacles.clear();
        state.start();
        state.drain_events();
        state
    }

    fn pickup(id: u32, x: f32, y: f32) -> Pickup {
        Pickup {
            id,
            rect: Rect::new(Vec2::new(x, y), Vec2::splat(30.0)),
            collected: false,
        }
    }

    fn obstacle(id: u32, x: f32) -> Obstacle {
        Obstacle {
            id,
            rect: Rect::new(Vec2::new(x, 460.0), Vec2::splat(40.0)),
        }
    }

    #[test]
    fn test_touched_pickups_reverse_order() {
        let player = Rect::new(Vec2::new(100.0, 100.0), Vec2::splat(50.0));
        let pickups = vec![
            pickup(1, 110.0, 110.0),
            pickup(2, 500.0, 500.0),
            pickup(3, 120.0, 90.0),
        ];
        assert_eq!(touched_pickups(&player, &pickups), vec![2, 0]);
    }

    #[test]
    fn test_collect_pickup_once() {
        let mut state = running_state();
        state.pickups.push(pickup(10, 60.0, 460.0));

        resolve(&mut state);
        assert!(state.pickups[0].collected);
        assert_eq!(state.score, 10);

        resolve(&mut state);
        assert_eq!(state.score, 10);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PickupCollected {
                pickup_id: 10,
                score: 10
            }]
        );
    }

    #[test]
    fn test_grounded_obstacle_hit_respawns() {
        let mut state = running_state();
        state.obstacles.push(obstacle(5, 300.0));
        state.player.pos.x = 280.0;

        resolve(&mut state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.player.pos, state.tuning.spawn());
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_jumping_player_passes_over_obstacle() {
        let mut state = running_state();
        state.obstacles.push(obstacle(5, 300.0));
        state.player.pos = Vec2::new(280.0, 440.0);
        state.player.jumping = true;

        resolve(&mut state);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_near_ground_without_jump_flag_is_grounded() {
        let mut state = running_state();
        state.obstacles.push(obstacle(5, 300.0));
        state.player.pos = Vec2::new(280.0, 447.0);

        resolve(&mut state);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_above_epsilon_is_not_grounded() {
        let mut state = running_state();
        state.obstacles.push(obstacle(5, 300.0));
        state.player.pos = Vec2::new(280.0, 444.0);

        resolve(&mut state);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_only_first_obstacle_counts() {
        let mut state = running_state();
        state.obstacles.push(obstacle(5, 300.0));
        state.obstacles.push(obstacle(6, 320.0));
        state.player.pos.x = 290.0;

        resolve(&mut state);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = running_state();
        state.lives = 1;
        state.obstacles.push(obstacle(5, 300.0));
        state.player.pos.x = 280.0;

        resolve(&mut state);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.is_running());
    }

    #[test]
    fn test_game_over_beats_goal_in_same_tick() {
        let mut state = running_state();
        state.lives = 1;
        // Obstacle right under the goal's left edge
        state.obstacles.push(obstacle(5, 660.0));
        state.player.pos.x = 660.0;
        assert!(state.player.rect().overlaps(&state.goal.rect));

        resolve(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::LevelComplete { .. }))
        );
    }

    #[test]
    fn test_goal_completes_level() {
        let mut state = running_state();
        state.player.pos.x = 650.0;

        resolve(&mut state);
        assert_eq!(state.phase, GamePhase::LevelComplete);
    }

    #[test]
    fn test_goal_checked_while_airborne() {
        let mut state = running_state();
        state.player.pos = Vec2::new(650.0, 400.0);
        state.player.jumping = true;

        resolve(&mut state);
        assert_eq!(state.phase, GamePhase::LevelComplete);
    }

    #[test]
    fn test_nothing_resolves_unless_running() {
        let mut state = running_state();
        state.pause();
        state.pickups.push(pickup(10, 60.0, 460.0));
        state.player.pos.x = 650.0;

        resolve(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Paused);
    }
}
