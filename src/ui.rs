//! UI and render sinks
//!
//! The simulation never draws anything itself. Once per frame the app hands a
//! read-only view of the state to a `RenderSink`, and after every change it
//! pushes HUD values, overlays and the status line to a `UiSink`.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect};

/// Values shown in the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            lives: state.lives,
            level: state.level,
        }
    }
}

/// Modal popup currently shown over the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    Hidden,
    LevelComplete { score: u64 },
    GameOver { score: u64, level: u32 },
}

impl Overlay {
    pub fn from_state(state: &GameState) -> Self {
        match state.phase {
            GamePhase::LevelComplete => Overlay::LevelComplete { score: state.score },
            GamePhase::GameOver => Overlay::GameOver {
                score: state.score,
                level: state.level,
            },
            _ => Overlay::Hidden,
        }
    }
}

/// Status line text for a phase
pub fn status_message(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Idle => "Press start to play",
        GamePhase::Running => "Game running...",
        GamePhase::Paused => "Game paused",
        GamePhase::LevelComplete => "Level complete!",
        GamePhase::GameOver => "Game over",
    }
}

/// Draws the play field; called every frame, paused or not
pub trait RenderSink {
    fn draw(&mut self, state: &GameState);
}

/// Receives HUD, overlay and status updates
pub trait UiSink {
    fn update_hud(&mut self, hud: Hud);
    fn show_overlay(&mut self, overlay: Overlay);
    fn set_message(&mut self, message: &str);
}

/// UI sink that writes everything to the log
#[derive(Debug, Default)]
pub struct LogUi {
    last_hud: Option<Hud>,
}

impl UiSink for LogUi {
    fn update_hud(&mut self, hud: Hud) {
        if self.last_hud != Some(hud) {
            log::info!(
                "Score: {}  Lives: {}  Level: {}",
                hud.score,
                hud.lives,
                hud.level
            );
            self.last_hud = Some(hud);
        }
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Hidden => {}
            Overlay::LevelComplete { score } => log::info!("Level complete! Score: {}", score),
            Overlay::GameOver { score, level } => {
                log::info!("Game over! Final score: {}, reached level {}", score, level)
            }
        }
    }

    fn set_message(&mut self, message: &str) {
        log::info!("{}", message);
    }
}

/// Character-cell renderer for terminals and logs
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// World units per cell
    pub cell_w: f32,
    pub cell_h: f32,
    /// Last drawn frame
    pub frame: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            cell_w: 10.0,
            cell_h: 20.0,
            frame: String::new(),
        }
    }
}

impl TextRenderer {
    fn fill(&self, grid: &mut [Vec<char>], rect: &Rect, ch: char) {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |r| r.len());
        let cell = |v: f32, size: f32, max: usize| ((v / size).max(0.0) as usize).min(max);

        let (c0, c1) = (
            cell(rect.pos.x, self.cell_w, cols),
            cell(rect.right(), self.cell_w, cols),
        );
        let (r0, r1) = (
            cell(rect.pos.y, self.cell_h, rows),
            cell(rect.bottom(), self.cell_h, rows),
        );
        for row in grid.iter_mut().take(r1.max(r0 + 1).min(rows)).skip(r0) {
            for c in row.iter_mut().take(c1.max(c0 + 1).min(cols)).skip(c0) {
                *c = ch;
            }
        }
    }
}

impl RenderSink for TextRenderer {
    fn draw(&mut self, state: &GameState) {
        let t = &state.tuning;
        let cols = (t.world_width / self.cell_w).ceil() as usize;
        let rows = (t.world_height / self.cell_h).ceil() as usize;
        let mut grid = vec![vec![' '; cols]; rows];

        let ground = Rect::new(
            glam::Vec2::new(0.0, t.ground_top()),
            glam::Vec2::new(t.world_width, t.ground_height),
        );
        self.fill(&mut grid, &ground, '=');
        self.fill(&mut grid, &state.goal.rect, 'H');
        for obstacle in &state.obstacles {
            self.fill(&mut grid, &obstacle.rect, '#');
        }
        for pickup in state.pickups.iter().filter(|p| !p.collected) {
            self.fill(&mut grid, &pickup.rect, 'o');
        }
        self.fill(&mut grid, &state.player.rect(), '@');

        self.frame = grid
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
    }
}
