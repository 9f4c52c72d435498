//! Input sampler for terminal environments.
//!
//! Rotate and drop are edge-triggered: a press counts once, however long the
//! key is held. Left and right are level-triggered: the controller repeats the
//! move for as long as the direction stays held.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::debug;

use crate::map::{map_key, GameKey};
use crate::types::InputState;

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

// In terminals without key-release events, auto-repeat presses keep a key
// alive; once they stop for this long the key counts as released.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Collects key events between ticks and produces one [`InputState`] per tick
#[derive(Debug, Clone)]
pub struct InputSampler {
    horizontal: HorizontalDirection,
    rotate_down: bool,
    drop_down: bool,
    rotate_pressed: bool,
    drop_pressed: bool,
    /// Time since the last press, in ms
    idle_ms: u32,
    key_release_timeout_ms: u32,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler {
    pub fn new() -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            rotate_down: false,
            drop_down: false,
            rotate_pressed: false,
            drop_pressed: false,
            idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn horizontal(&self) -> HorizontalDirection {
        self.horizontal
    }

    /// Feed a crossterm event; repeats count as presses
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) {
        let Some(key) = map_key(code) else {
            return;
        };
        self.idle_ms = 0;

        match key {
            GameKey::Rotate => {
                if !self.rotate_down {
                    self.rotate_down = true;
                    self.rotate_pressed = true;
                }
            }
            GameKey::Drop => {
                if !self.drop_down {
                    self.drop_down = true;
                    self.drop_pressed = true;
                }
            }
            // Last pressed direction wins.
            GameKey::Left => self.horizontal = HorizontalDirection::Left,
            GameKey::Right => self.horizontal = HorizontalDirection::Right,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match map_key(code) {
            Some(GameKey::Rotate) => self.rotate_down = false,
            Some(GameKey::Drop) => self.drop_down = false,
            Some(GameKey::Left) if self.horizontal == HorizontalDirection::Left => {
                self.horizontal = HorizontalDirection::None;
            }
            Some(GameKey::Right) if self.horizontal == HorizontalDirection::Right => {
                self.horizontal = HorizontalDirection::None;
            }
            _ => {}
        }
    }

    fn release_all(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.rotate_down = false;
        self.drop_down = false;
    }

    /// Produce the input for the next tick and consume pending presses.
    pub fn sample(&mut self, elapsed_ms: u32) -> InputState {
        let state = InputState {
            rotate: std::mem::take(&mut self.rotate_pressed),
            drop: std::mem::take(&mut self.drop_pressed),
            left: self.horizontal == HorizontalDirection::Left,
            right: self.horizontal == HorizontalDirection::Right,
        };

        // Auto-release when terminal does not emit release events.
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.key_release_timeout_ms
            && (self.horizontal != HorizontalDirection::None || self.rotate_down || self.drop_down)
        {
            debug!("no key activity for {}ms, releasing held keys", self.idle_ms);
            self.release_all();
        }

        state
    }
}
