//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the falling-piece rules: movement, rotation, gravity,
//! locking, line clearing and scoring. It has no dependencies on rendering,
//! audio or I/O. Presentation layers listen through [`GameEvents`].
//!
//! # Module Structure
//!
//! - [`board`]: settled cells with coordinate lookup and the collision query
//! - [`config`]: tunable delays, quota and seed, with environment overrides
//! - [`controller`]: the piece controller driving input, gravity and locking
//! - [`events`]: notification hooks for UI and audio
//! - [`line_clear`]: full-row detection and compaction
//! - [`mask`]: 4x4 shape grids, clockwise rotation and edge scans
//! - [`piece`]: the active piece placed on the board
//! - [`rng`]: seeded uniform shape selection with a one-deep preview
//! - [`scoring`]: line points, level and line quota
//! - [`template`]: named shapes and the classic seven
//!
//! # Game Rules
//!
//! - **Spawn**: at column 3 with the shape's top edge on row 24; a spawn that
//!   overlaps settled cells ends the game
//! - **Rotation**: clockwise only, keeps the bottom edge row, no wall kicks
//! - **Gravity**: one row every `0.60 / level` seconds
//! - **Lock Delay**: 0.5s after a piece comes to rest, sliding still allowed
//! - **Scoring**: 10/25/50/100 points for 1/2/3/4 rows, times the level
//! - **Levels**: every 8 cleared rows
//!
//! # Example
//!
//! ```
//! use fallblocks_core::{classic_templates, GameConfig, PieceController, ShapeQueue};
//! use fallblocks_core::types::InputState;
//!
//! let queue = ShapeQueue::new(classic_templates(), 12345).unwrap();
//! let mut game = PieceController::new(GameConfig::default(), queue);
//! game.start();
//!
//! let drop = InputState { drop: true, ..InputState::IDLE };
//! game.tick(0.016, drop);
//! assert!(game.is_grounded());
//!
//! // The lock delay runs out and the next piece spawns.
//! assert!(game.tick(0.6, InputState::IDLE));
//! assert_eq!(game.board().len(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`PieceController::tick`] every frame with the elapsed seconds and the
//! sampled input. Timers count down; an action fires when its timer goes
//! negative.

pub mod board;
pub mod config;
pub mod controller;
pub mod events;
pub mod line_clear;
pub mod mask;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod template;

pub use fallblocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SettledCell};
pub use config::GameConfig;
pub use controller::{Phase, PieceController};
pub use events::{GameEvents, NoopEvents};
pub use line_clear::clear_lines;
pub use mask::Mask;
pub use piece::{Piece, PieceCells};
pub use rng::{ShapeQueue, SimpleRng};
pub use scoring::{calculate_line_score, score_lines, Progress, ScoreAward};
pub use template::{classic_templates, ShapeTemplate};
