//! Keyboard input
//!
//! Key names follow the DOM `KeyboardEvent.key` values.

use std::collections::HashSet;

use crate::sim::{GameState, TickInput};

/// Keys that move left
pub const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
/// Keys that move right
pub const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];
/// Key that jumps
pub const JUMP_KEY: &str = " ";

/// Anything that can produce the input for the next tick
pub trait InputSource {
    /// Input for the next tick; may read the state but never mutates it
    fn poll(&mut self, state: &GameState) -> TickInput;

    /// Forget one-shot inputs once a tick has consumed them
    fn consume_one_shots(&mut self) {}
}

/// Held-key tracker
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: HashSet<String>,
    jump_pressed: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; auto-repeat presses of a held key do not re-jump
    pub fn key_down(&mut self, key: &str) {
        let newly_pressed = self.held.insert(key.to_string());
        if key == JUMP_KEY && newly_pressed {
            self.jump_pressed = true;
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.jump_pressed = false;
    }
}

impl InputSource for Keyboard {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        TickInput {
            left: self.any_held(&LEFT_KEYS),
            right: self.any_held(&RIGHT_KEYS),
            jump: self.jump_pressed,
        }
    }

    fn consume_one_shots(&mut self) {
        self.jump_pressed = false;
    }
}
