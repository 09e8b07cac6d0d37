//! Frame driver
//!
//! Turns variable-length display frames into fixed simulation ticks, feeds
//! each tick from an input source, and keeps the render/UI sinks current.

use crate::consts::*;
use crate::platform::InputSource;
use crate::sim::{Command, GameEvent, GameState, tick};
use crate::ui::{Hud, Overlay, RenderSink, UiSink, status_message};

/// Game instance holding the session and its collaborators
pub struct App<I, R, U> {
    state: GameState,
    input: I,
    renderer: R,
    ui: U,
    accumulator: f32,
}

impl<I: InputSource, R: RenderSink, U: UiSink> App<I, R, U> {
    pub fn new(state: GameState, input: I, renderer: R, ui: U) -> Self {
        let mut app = Self {
            state,
            input,
            renderer,
            ui,
            accumulator: 0.0,
        };
        app.state.drain_events();
        app.refresh_ui();
        app
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Run as many fixed ticks as `elapsed` seconds cover, then draw once
    pub fn frame(&mut self, elapsed: f32) {
        let elapsed = elapsed.clamp(0.0, 0.25);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.run_tick();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Time the substep cap could not cover is dropped, not replayed later
        if self.accumulator >= SIM_DT {
            log::debug!("Frame overran {} substeps, dropping {:.3}s", substeps, self.accumulator);
            self.accumulator = 0.0;
        }

        self.flush_events();
        // Drawing continues while paused or between levels
        self.renderer.draw(&self.state);
    }

    /// Run exactly one tick and draw
    pub fn step(&mut self) {
        self.run_tick();
        self.flush_events();
        self.renderer.draw(&self.state);
    }

    /// Apply a lifecycle command (start, pause, reset, next level, replay)
    pub fn command(&mut self, command: Command) {
        self.state.apply(command);
        self.flush_events();
    }

    fn run_tick(&mut self) {
        let input = self.input.poll(&self.state);
        tick(&mut self.state, &input, SIM_DT);
        // Clear one-shot inputs after processing
        self.input.consume_one_shots();
    }

    /// Forward pending events to the UI sink
    fn flush_events(&mut self) {
        let events = self.state.drain_events();
        if events.is_empty() {
            return;
        }

        self.ui.update_hud(Hud::from_state(&self.state));
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::PhaseChanged { .. }))
        {
            self.ui.show_overlay(Overlay::from_state(&self.state));
            self.ui.set_message(status_message(self.state.phase));
        }
    }

    fn refresh_ui(&mut self) {
        self.ui.update_hud(Hud::from_state(&self.state));
        self.ui.show_overlay(Overlay::from_state(&self.state));
        self.ui.set_message(status_message(self.state.phase));
    }
}
