//! Board tests - collision query and line clearing through the facade

use fallblocks::core::{clear_lines, Board, SettledCell};
use fallblocks::types::{Coord, Rgba, BOARD_HEIGHT, BOARD_WIDTH};

fn cell(x: i32, y: i32, owner: u32) -> SettledCell {
    SettledCell::new(Coord::new(x, y), Rgba::GREEN, owner)
}

fn fill_row(board: &mut Board, y: i32, skip: Option<i32>) {
    for x in 0..BOARD_WIDTH as i32 {
        if Some(x) != skip {
            assert!(board.set(cell(x, y, 100)));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_empty());

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert!(!board.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_bounds() {
    let board = Board::new();

    // Walls and floor
    assert!(board.is_out_of_bounds(-1, 0));
    assert!(board.is_out_of_bounds(BOARD_WIDTH as i32, 0));
    assert!(board.is_out_of_bounds(0, -1));

    // No ceiling: rotation may push cells above the spawn row
    assert!(!board.is_out_of_bounds(0, BOARD_HEIGHT as i32 + 3));
}

#[test]
fn test_board_set_above_ceiling_grows() {
    let mut board = Board::new();
    assert!(board.set(cell(2, 40, 1)));
    assert!(board.is_occupied(2, 40));
    assert_eq!(board.len(), 1);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(cell(-1, 0, 1)));
    assert!(!board.set(cell(0, -1, 1)));
    assert!(!board.set(cell(BOARD_WIDTH as i32, 0, 1)));
    assert!(board.is_empty());
}

#[test]
fn test_collision_ignores_own_cells() {
    let mut board = Board::new();
    board.set(cell(4, 0, 7));

    assert!(board.collides([Coord::new(4, 0)], 8));
    assert!(!board.collides([Coord::new(4, 0)], 7));
    assert!(!board.collides([Coord::new(5, 0)], 8));
    assert!(board.collides([Coord::new(5, -1)], 8));
}

#[test]
fn test_lock_cells_all_or_nothing() {
    let mut board = Board::new();
    board.set(cell(1, 0, 1));

    let cells = [Coord::new(0, 0), Coord::new(1, 0)];
    assert!(!board.lock_cells(&cells, Rgba::RED, 2));
    assert_eq!(board.len(), 1);

    let cells = [Coord::new(0, 1), Coord::new(1, 1)];
    assert!(board.lock_cells(&cells, Rgba::RED, 2));
    assert_eq!(board.owner_at(0, 1), Some(2));
}

#[test]
fn test_clear_on_empty_board() {
    let mut board = Board::new();
    assert_eq!(board.clear_full_rows(), 0);
    assert!(board.is_empty());
}

#[test]
fn test_almost_full_row_not_cleared() {
    let mut board = Board::new();
    fill_row(&mut board, 0, Some(9));
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.row_count(0), 9);

    board.set(cell(9, 0, 5));
    assert!(board.is_row_full(0));
    assert_eq!(board.clear_full_rows(), 1);
    assert!(board.is_empty());
}

#[test]
fn test_cells_above_shift_down() {
    let mut board = Board::new();
    fill_row(&mut board, 0, None);
    board.set(cell(3, 1, 1));
    board.set(cell(3, 2, 2));
    board.set(cell(8, 5, 3));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.len(), 3);
    assert_eq!(board.owner_at(3, 0), Some(1));
    assert_eq!(board.owner_at(3, 1), Some(2));
    assert_eq!(board.owner_at(8, 4), Some(3));
}

#[test]
fn test_four_full_rows_cleared() {
    let mut board = Board::new();
    for y in 0..4 {
        fill_row(&mut board, y, None);
    }
    board.set(cell(0, 4, 1));

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.len(), 1);
    assert_eq!(board.owner_at(0, 0), Some(1));
}

#[test]
fn test_split_full_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 0, None);
    fill_row(&mut board, 1, Some(0));
    fill_row(&mut board, 2, None);
    board.set(cell(6, 3, 1));

    assert_eq!(board.clear_full_rows(), 2);
    // Row 1 drops to row 0, the lone cell on row 3 to row 1.
    assert_eq!(board.row_count(0), 9);
    assert_eq!(board.owner_at(6, 1), Some(1));
    assert_eq!(board.len(), 10);
}

#[test]
fn test_clear_lines_on_cell_list() {
    let mut cells: Vec<SettledCell> = (0..10).map(|x| cell(x, 0, 1)).collect();
    cells.push(cell(2, 1, 2));
    cells.push(cell(7, 3, 3));

    assert_eq!(clear_lines(&mut cells, 10), 1);
    assert_eq!(cells.len(), 2);
    assert!(cells.contains(&cell(2, 0, 2)));
    assert!(cells.contains(&cell(7, 2, 3)));
}

#[test]
fn test_clear_lines_empty_list() {
    let mut cells = Vec::new();
    assert_eq!(clear_lines(&mut cells, 10), 0);
    assert!(cells.is_empty());
}

#[test]
fn test_clear_resets_board() {
    let mut board = Board::new();
    fill_row(&mut board, 3, Some(2));
    board.clear();
    assert!(board.is_empty());
}

#[test]
fn test_board_and_cell_list_clear_agree() {
    let mut board = Board::new();
    fill_row(&mut board, 0, None);
    fill_row(&mut board, 1, Some(4));
    fill_row(&mut board, 2, None);
    fill_row(&mut board, 3, None);
    fill_row(&mut board, 5, Some(0));
    assert!(board.set(cell(6, 8, 7)));
    assert!(board.set(cell(1, 25, 8)));

    let mut cells = board.settled_cells();
    let listed = clear_lines(&mut cells, BOARD_WIDTH as usize);
    let cleared = board.clear_full_rows();

    assert_eq!(cleared, 3);
    assert_eq!(listed, cleared);
    assert_eq!(board.settled_cells(), cells);
    assert_eq!(board.owner_at(6, 5), Some(7));
    assert_eq!(board.owner_at(1, 22), Some(8));
}
