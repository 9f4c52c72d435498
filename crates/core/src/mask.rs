//! Mask module - the 4x4 cell grid of a shape
//!
//! Storage is column-major, `cells[x][y]`, with `x` running left to right and
//! `y` running **top to bottom**. This is the order shape records are saved in.
//! The piece converts mask rows to board rows (which count upward).

use crate::types::MASK_SIZE;

const LAST: usize = MASK_SIZE - 1;

/// A 4x4 boolean shape grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mask {
    cells: [[bool; MASK_SIZE]; MASK_SIZE],
}

impl Mask {
    /// Create an empty mask
    pub const fn empty() -> Self {
        Self {
            cells: [[false; MASK_SIZE]; MASK_SIZE],
        }
    }

    /// Create from column-major storage (`cells[x][y]`, y = 0 is the top row)
    pub const fn from_columns(cells: [[bool; MASK_SIZE]; MASK_SIZE]) -> Self {
        Self { cells }
    }

    /// Create from four text rows, top to bottom. `#` marks a filled cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallblocks_core::Mask;
    ///
    /// let t = Mask::from_rows(["....", "###.", ".#..", "...."]);
    /// assert_eq!(t.count(), 4);
    /// assert!(t.get(1, 2));
    /// ```
    pub fn from_rows(rows: [&str; MASK_SIZE]) -> Self {
        let mut mask = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(MASK_SIZE).enumerate() {
                mask.cells[x][y] = ch == '#';
            }
        }
        mask
    }

    /// Column-major storage
    pub fn columns(&self) -> &[[bool; MASK_SIZE]; MASK_SIZE] {
        &self.cells
    }

    /// Check cell at column `x`, row `y` (top-down). Out of range is empty.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < MASK_SIZE && y < MASK_SIZE && self.cells[x][y]
    }

    /// Set cell at column `x`, row `y`. Returns false if out of range.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) -> bool {
        if x >= MASK_SIZE || y >= MASK_SIZE {
            return false;
        }
        self.cells[x][y] = filled;
        true
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Filled cells as `(x, y)` pairs, y top-down
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..MASK_SIZE).flat_map(move |x| {
            (0..MASK_SIZE).filter_map(move |y| self.cells[x][y].then_some((x, y)))
        })
    }

    /// Rotate 90° clockwise: `new[x][y] = old[y][3 - x]`
    pub fn rotate_cw(&self) -> Self {
        let mut out = Self::empty();
        for x in 0..MASK_SIZE {
            for y in 0..MASK_SIZE {
                out.cells[x][y] = self.cells[y][LAST - x];
            }
        }
        out
    }

    fn column_filled(&self, x: usize) -> bool {
        self.cells[x].iter().any(|&c| c)
    }

    fn row_filled(&self, y: usize) -> bool {
        (0..MASK_SIZE).any(|x| self.cells[x][y])
    }

    /// Offset of the left edge from the box's left side (first filled column)
    pub fn left(&self) -> Option<i32> {
        (0..MASK_SIZE)
            .find(|&x| self.column_filled(x))
            .map(|x| x as i32)
    }

    /// Offset of the right edge from the box's left side (last filled column + 1)
    pub fn right(&self) -> Option<i32> {
        (0..MASK_SIZE)
            .rev()
            .find(|&x| self.column_filled(x))
            .map(|x| x as i32 + 1)
    }

    /// Rows between the box's bottom and the lowest filled row
    pub fn bottom(&self) -> Option<i32> {
        (0..MASK_SIZE)
            .rev()
            .find(|&y| self.row_filled(y))
            .map(|y| (LAST - y) as i32)
    }

    /// Offset of the top edge from the box's bottom (highest filled row + 1)
    pub fn top(&self) -> Option<i32> {
        (0..MASK_SIZE)
            .find(|&y| self.row_filled(y))
            .map(|y| (MASK_SIZE - y) as i32)
    }
}
