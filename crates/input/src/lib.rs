//! Terminal input module.
//!
//! Maps `crossterm` key events onto the four game keys and samples them into a
//! per-tick [`crate::types::InputState`]. Works in terminals that never emit
//! key-release events by releasing held keys after a timeout.

pub mod handler;
pub mod map;

pub use fallblocks_types as types;

pub use handler::InputSampler;
pub use map::{map_key, should_quit, GameKey};
