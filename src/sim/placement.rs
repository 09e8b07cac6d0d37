//! Entity placement by rejection sampling
//!
//! Candidates are drawn uniformly from a spawn area and rejected until one
//! satisfies the caller's constraints. The number of draws is capped; when
//! the cap is hit the area is scanned on a grid for the first valid cell,
//! and if even that fails the last drawn candidate is used as-is.

use glam::Vec2;
use rand::Rng;

use super::geometry::Rect;
use crate::tuning::SpawnArea;

/// How one kind of entity is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRule {
    pub area: SpawnArea,
    /// Side length of the (square) entity
    pub size: f32,
    /// Random draws before falling back to the grid scan
    pub max_attempts: u32,
}

impl SpawnRule {
    fn rect_at(&self, pos: Vec2) -> Rect {
        Rect::new(pos, Vec2::splat(self.size))
    }
}

/// Place `count` pickups that avoid `obstacles` and the goal
///
/// Pickups do not avoid each other.
pub fn place_pickups<R: Rng>(
    rng: &mut R,
    count: u32,
    rule: &SpawnRule,
    obstacles: &[Rect],
    goal: &Rect,
) -> Vec<Rect> {
    (0..count)
        .map(|_| {
            let pos = sample_position(&mut *rng, rule, |pos| {
                let candidate = rule.rect_at(pos);
                !obstacles.iter().any(|o| candidate.overlaps(o)) && !candidate.overlaps(goal)
            });
            rule.rect_at(pos)
        })
        .collect()
}

/// Place `count` obstacles that avoid each other and keep at least
/// `clearance` horizontal distance from `player_x` and `goal_x`
pub fn place_obstacles<R: Rng>(
    rng: &mut R,
    count: u32,
    rule: &SpawnRule,
    player_x: f32,
    goal_x: f32,
    clearance: f32,
) -> Vec<Rect> {
    let mut placed: Vec<Rect> = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let pos = sample_position(&mut *rng, rule, |pos| {
            let candidate = rule.rect_at(pos);
            !placed.iter().any(|o| candidate.overlaps(o))
                && (pos.x - player_x).abs() >= clearance
                && (pos.x - goal_x).abs() >= clearance
        });
        placed.push(rule.rect_at(pos));
    }
    placed
}

/// Draw candidates until `is_valid` accepts one (bounded, see module docs)
fn sample_position<R, F>(rng: &mut R, rule: &SpawnRule, is_valid: F) -> Vec2
where
    R: Rng,
    F: Fn(Vec2) -> bool,
{
    let mut last = rule.area.origin;
    for _ in 0..rule.max_attempts {
        let candidate = rule.area.point_at(rng.random::<f32>(), rng.random::<f32>());
        if is_valid(candidate) {
            return candidate;
        }
        last = candidate;
    }

    if let Some(pos) = grid_scan(&rule.area, (rule.size / 2.0).max(1.0), &is_valid) {
        log::debug!(
            "Placement fell back to grid scan after {} attempts: {:?}",
            rule.max_attempts,
            pos
        );
        return pos;
    }

    log::warn!(
        "No valid placement in {:?}, using last candidate {:?}",
        rule.area,
        last
    );
    last
}

/// First valid cell scanning row by row, left to right
fn grid_scan<F: Fn(Vec2) -> bool>(area: &SpawnArea, step: f32, is_valid: &F) -> Option<Vec2> {
    let cells = |span: f32| -> u32 {
        if span <= 0.0 {
            1
        } else {
            (span / step).ceil() as u32
        }
    };
    let (cols, rows) = (cells(area.span.x), cells(area.span.y));

    (0..rows)
        .flat_map(|j| (0..cols).map(move |i| (i, j)))
        .map(|(i, j)| area.origin + Vec2::new(i as f32 * step, j as f32 * step))
        .find(|&pos| is_valid(pos))
}
