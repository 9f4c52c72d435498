//! Piece module - the active falling shape
//!
//! A piece is a mask placed on the board by its anchor, the bottom-left corner
//! of the 4x4 box. Mask cell `(x, y)` (y top-down) lands on board cell
//! `(anchor.x + x, anchor.y + 3 - y)`.

use arrayvec::ArrayVec;

use crate::mask::Mask;
use crate::types::{Coord, PieceId, Rgba, MASK_SIZE};

/// Upper bound on filled cells in a mask
pub const MAX_PIECE_CELLS: usize = MASK_SIZE * MASK_SIZE;

/// Absolute cells of a piece; stack-only
pub type PieceCells = ArrayVec<Coord, MAX_PIECE_CELLS>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub mask: Mask,
    pub color: Rgba,
    pub anchor: Coord,
}

impl Piece {
    pub fn new(id: PieceId, mask: Mask, color: Rgba, anchor: Coord) -> Self {
        Self {
            id,
            mask,
            color,
            anchor,
        }
    }

    /// Absolute board cells of every filled mask cell
    pub fn cells(&self) -> PieceCells {
        self.cells_offset(0, 0)
    }

    /// Absolute cells after displacing the piece by `(dx, dy)`
    pub fn cells_offset(&self, dx: i32, dy: i32) -> PieceCells {
        let base = self.anchor.offset(dx, dy);
        self.mask
            .filled()
            .map(|(x, y)| base.offset(x as i32, (MASK_SIZE - 1 - y) as i32))
            .collect()
    }

    /// Copy displaced by `(dx, dy)`
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            anchor: self.anchor.offset(dx, dy),
            ..*self
        }
    }

    /// Copy rotated 90° clockwise, re-anchored so the bottom edge row stays put
    pub fn rotated_cw(&self) -> Self {
        let mask = self.mask.rotate_cw();
        let previous_bottom = self.mask.bottom().unwrap_or(0);
        let bottom = mask.bottom().unwrap_or(0);
        Self {
            mask,
            anchor: self.anchor.offset(0, previous_bottom - bottom),
            ..*self
        }
    }

    /// Leftmost occupied column on the board
    pub fn left_edge(&self) -> i32 {
        self.anchor.x + self.mask.left().unwrap_or(0)
    }

    /// One past the rightmost occupied column on the board
    pub fn right_edge(&self) -> i32 {
        self.anchor.x + self.mask.right().unwrap_or(0)
    }

    /// Lowest occupied row on the board
    pub fn bottom_row(&self) -> i32 {
        self.anchor.y + self.mask.bottom().unwrap_or(0)
    }

    /// One past the highest occupied row on the board
    pub fn top_edge(&self) -> i32 {
        self.anchor.y + self.mask.top().unwrap_or(0)
    }

    /// Copy with the anchor pulled back inside `[0, width)` horizontally.
    ///
    /// This is a hard clamp, not a collision check.
    pub fn clamped(&self, width: i32) -> Self {
        if self.left_edge() < 0 {
            Self {
                anchor: Coord::new(-self.mask.left().unwrap_or(0), self.anchor.y),
                ..*self
            }
        } else if self.right_edge() > width {
            Self {
                anchor: Coord::new(width - self.mask.right().unwrap_or(0), self.anchor.y),
                ..*self
            }
        } else {
            *self
        }
    }
}
