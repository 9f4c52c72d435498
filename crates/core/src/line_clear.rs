//! Line clearing over a flat list of settled cells
//!
//! Cells are processed in one bottom-up pass over row groups. A group that
//! reaches the board width is deleted; every kept cell is shifted down by the
//! number of rows deleted below it and compacted toward the front in place.

use crate::board::SettledCell;

/// Remove every full row from `cells`, shifting the cells above downward.
///
/// Returns the number of rows cleared. Cells are left sorted bottom row first,
/// left to right. An empty list is returned untouched.
///
/// # Examples
///
/// ```
/// use fallblocks_core::{clear_lines, SettledCell};
/// use fallblocks_core::types::{Coord, Rgba};
///
/// let mut cells: Vec<SettledCell> = (0..10)
///     .map(|x| SettledCell::new(Coord::new(x, 0), Rgba::RED, 1))
///     .collect();
/// cells.push(SettledCell::new(Coord::new(4, 1), Rgba::RED, 1));
///
/// assert_eq!(clear_lines(&mut cells, 10), 1);
/// assert_eq!(cells.len(), 1);
/// assert_eq!(cells[0].pos, Coord::new(4, 0));
/// ```
pub fn clear_lines(cells: &mut Vec<SettledCell>, width: usize) -> usize {
    if cells.is_empty() || width == 0 {
        return 0;
    }

    // Coordinates are unique, so an unstable sort is enough and stays off the heap.
    cells.sort_unstable_by_key(|c| (c.pos.y, c.pos.x));

    let len = cells.len();
    let mut cleared = 0usize;
    let mut write = 0usize;
    let mut start = 0usize;

    while start < len {
        let y = cells[start].pos.y;
        let mut end = start + 1;
        while end < len && cells[end].pos.y == y {
            end += 1;
        }

        if end - start >= width {
            cleared += 1;
        } else {
            for i in start..end {
                let mut cell = cells[i];
                cell.pos.y -= cleared as i32;
                cells[write] = cell;
                write += 1;
            }
        }
        start = end;
    }

    cells.truncate(write);
    cleared
}
