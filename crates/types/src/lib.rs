//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the core, the shape loader and
//! the input sampler. Nothing here has dependencies, so every crate in the
//! workspace can use it.
//!
//! # Board Coordinates
//!
//! The board is 10 columns wide. Rows count **upward** from the floor:
//!
//! - **x**: 0 (left) .. 9 (right)
//! - **y**: 0 is the bottom row; pieces spawn with their top edge at row 24
//!
//! Cells may sit above the spawn ceiling after a rotation, so the board has no
//! hard ceiling.
//!
//! # Game Timing Constants
//!
//! Timing values are in seconds, matching the `delta` passed to
//! `PieceController::tick`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_DELAY` | 0.60 | Gravity interval at level 1 (divided by level) |
//! | `LOCK_DELAY` | 0.50 | Grace window after a piece comes to rest |
//! | `INPUT_DELAY` | 0.10 | Repeat/debounce interval for player input |
//! | `LINES_PER_LEVEL` | 8 | Rows to clear before the level increases |
//!
//! # Examples
//!
//! ```
//! use fallblocks_types::{Coord, Rgba, BOARD_WIDTH};
//!
//! let c = Coord::new(3, 0).offset(1, -1);
//! assert_eq!(c, Coord::new(4, -1));
//!
//! assert_eq!(Rgba::RED.a, 1.0);
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Spawn ceiling in rows; new pieces spawn with their top edge here
pub const BOARD_HEIGHT: u8 = 24;

/// Column of the 4x4 box's left edge at spawn
pub const SPAWN_COLUMN: i32 = 3;

/// Side length of a shape mask
pub const MASK_SIZE: usize = 4;

/// Gravity interval at level 1, in seconds
pub const BASE_FALL_DELAY: f32 = 0.60;

/// Grace window after a piece lands, in seconds
pub const LOCK_DELAY: f32 = 0.50;

/// Repeat interval for horizontal movement and debounce for rotate/drop
pub const INPUT_DELAY: f32 = 0.10;

/// Rows to clear per level
pub const LINES_PER_LEVEL: u32 = 8;

/// Level a new game starts at
pub const START_LEVEL: u32 = 1;

/// Line clear score table, multiplied by the current level.
///
/// Index is rows cleared, clamped to 4:
/// - 1 row: 10
/// - 2 rows: 25
/// - 3 rows: 50
/// - 4+ rows: 100 (bonus)
pub const LINE_SCORES: [u32; 5] = [0, 10, 25, 50, 100];

/// Identifier of a spawned piece.
///
/// Settled cells carry the id of the piece that produced them so collision
/// checks can skip the querying piece's own cells.
pub type PieceId = u32;

/// Absolute board coordinate in cells (y increases upward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Displace by `(dx, dy)` cells
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
    pub const ORANGE: Rgba = Rgba::new(1.0, 0.5, 0.0, 1.0);
    pub const PINK: Rgba = Rgba::new(1.0, 0.41, 0.71, 1.0);
    pub const PURPLE: Rgba = Rgba::new(0.63, 0.13, 0.94, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Check that every component lies in `[0, 1]`
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

/// Player input sampled once per tick.
///
/// Rotate and drop are edge-triggered ("just pressed"); left and right are
/// level-triggered ("is pressed") so holding a direction repeats the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub rotate: bool,
    pub drop: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// No keys pressed
    pub const IDLE: InputState = InputState {
        rotate: false,
        drop: false,
        left: false,
        right: false,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// Kind of notification a line clear produces
///
/// - **Line**: one to three rows
/// - **Bonus**: four or more rows at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearKind {
    Line,
    Bonus,
}

impl ClearKind {
    /// Classify a clear by row count; `None` when nothing cleared
    ///
    /// # Examples
    ///
    /// ```
    /// use fallblocks_types::ClearKind;
    ///
    /// assert_eq!(ClearKind::for_rows(0), None);
    /// assert_eq!(ClearKind::for_rows(3), Some(ClearKind::Line));
    /// assert_eq!(ClearKind::for_rows(4), Some(ClearKind::Bonus));
    /// ```
    pub fn for_rows(rows: usize) -> Option<Self> {
        match rows {
            0 => None,
            1..=3 => Some(ClearKind::Line),
            _ => Some(ClearKind::Bonus),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClearKind::Line => "line",
            ClearKind::Bonus => "bonus",
        }
    }
}

/// Core-side event recorded after a piece locks.
///
/// Observers can take it from the controller after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece: PieceId,
    pub lines_cleared: u32,
    pub points: u32,
    pub clear: Option<ClearKind>,
    pub level: u32,
}
