//! Board module - settled cells and the collision query
//!
//! The board is `width` columns wide with rows counting upward from the floor
//! (y = 0). Settled cells live in a flat row-major array that grows upward on
//! demand, so lookups are a direct index rather than a scan over every block.
//! The nominal height is the spawn ceiling; rotation may leave cells above it.

use crate::types::{Coord, PieceId, Rgba, BOARD_HEIGHT, BOARD_WIDTH, MASK_SIZE};

/// Rows kept above the spawn ceiling; `set` refuses cells higher than this
pub const MAX_HEADROOM_ROWS: usize = 64;

/// A unit block locked onto the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettledCell {
    pub pos: Coord,
    pub color: Rgba,
    /// Piece this block came from
    pub owner: PieceId,
}

impl SettledCell {
    pub fn new(pos: Coord, color: Rgba, owner: PieceId) -> Self {
        Self { pos, color, owner }
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major from the floor up (y * width + x)
    cells: Vec<Option<SettledCell>>,
}

impl Board {
    /// Create a new empty 10-wide board with the standard spawn ceiling
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given width and spawn ceiling
    pub fn with_size(width: u8, height: u8) -> Self {
        // Headroom for a piece rotated just under the ceiling.
        let rows = height as usize + MASK_SIZE;
        Self {
            width,
            height,
            cells: vec![None; rows * width as usize],
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get the spawn ceiling
    pub fn height(&self) -> u8 {
        self.height
    }

    fn stored_rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width as usize
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y as usize >= self.stored_rows() {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Check if position is off the grid (left, right or below the floor)
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.width as i32 || y < 0
    }

    /// Get the settled cell at (x, y), if any
    pub fn get(&self, x: i32, y: i32) -> Option<&SettledCell> {
        self.index(x, y).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Check if position holds a settled cell
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Owner of the settled cell at (x, y)
    pub fn owner_at(&self, x: i32, y: i32) -> Option<PieceId> {
        self.get(x, y).map(|c| c.owner)
    }

    /// Highest row count the board will grow to
    pub fn max_rows(&self) -> usize {
        self.height as usize + MAX_HEADROOM_ROWS
    }

    /// Place a settled cell at its own position, replacing whatever was there.
    /// Returns false if the position is off the grid or above
    /// [`Board::max_rows`].
    pub fn set(&mut self, cell: SettledCell) -> bool {
        let Coord { x, y } = cell.pos;
        if self.is_out_of_bounds(x, y) || y as usize >= self.max_rows() {
            return false;
        }
        let rows_needed = y as usize + 1;
        if rows_needed > self.stored_rows() {
            self.cells.resize(rows_needed * self.width as usize, None);
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = Some(cell);
                true
            }
            None => false,
        }
    }

    /// Board query: would any of `cells` leave the grid or overlap a settled
    /// cell belonging to a piece other than `owner`?
    pub fn collides<I>(&self, cells: I, owner: PieceId) -> bool
    where
        I: IntoIterator<Item = Coord>,
    {
        cells.into_iter().any(|Coord { x, y }| {
            self.is_out_of_bounds(x, y) || self.owner_at(x, y).is_some_and(|o| o != owner)
        })
    }

    /// Lock a piece's cells onto the board.
    /// Returns true if successful, false if any cell is off-grid or occupied.
    pub fn lock_cells(&mut self, cells: &[Coord], color: Rgba, owner: PieceId) -> bool {
        // First check if all positions are free
        if cells
            .iter()
            .any(|c| self.is_out_of_bounds(c.x, c.y) || self.is_occupied(c.x, c.y))
        {
            return false;
        }

        for &pos in cells {
            self.set(SettledCell::new(pos, color, owner));
        }

        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        self.row_count(y) == self.width as usize
    }

    /// Number of settled cells in row `y`
    pub fn row_count(&self, y: i32) -> usize {
        (0..self.width as i32)
            .filter(|&x| self.is_occupied(x, y))
            .count()
    }

    /// Total number of settled cells
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// All settled cells, bottom row first, left to right
    pub fn settled_cells(&self) -> Vec<SettledCell> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Remove every full row, compacting the rows above in place.
    /// Returns the number of rows cleared.
    ///
    /// Rows are walked bottom-up; each kept row moves down by the number of
    /// full rows found below it. Nothing is allocated.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let rows = self.stored_rows();
        let mut cleared = 0usize;

        for y in 0..rows {
            if self.is_row_full(y as i32) {
                cleared += 1;
                continue;
            }
            if cleared == 0 {
                continue;
            }

            let src = y * width;
            let dst = (y - cleared) * width;
            for x in 0..width {
                self.cells[dst + x] = self.cells[src + x].take().map(|mut cell| {
                    cell.pos.y -= cleared as i32;
                    cell
                });
            }
        }

        // Rows vacated at the top.
        let start = rows.saturating_sub(cleared) * width;
        for cell in &mut self.cells[start..] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
