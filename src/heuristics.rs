//! Heuristic estimators for the A* solver.
//!
//! Both functions estimate the remaining move cost from a board to the goal
//! set. They are pure: they read only the board, never its search context,
//! and calling them repeatedly on the same board yields the same value.
//! Any `Fn(&Board) -> u32` with the same contract can be handed to
//! [`crate::solver::solve_astar`] in their place.

use crate::engine::{Board, Tile, BOARD_LEN};

/// Width of the conceptual grid [`manhattan_distance`] folds the row into.
pub const GRID_WIDTH: usize = 5;

/// Counts misplaced tile pairs: ordered position pairs `(i, j)` with `i < j`
/// where cell `i` holds a white tile and cell `j` holds a black tile.
///
/// Every such pair still has to be untangled, so the count is zero exactly
/// on goal boards and positive everywhere else.
///
/// # Examples
///
/// ```
/// use tileswap_solver::heuristics::misplaced_pairs;
/// use tileswap_solver::utils::board_from_str;
///
/// let start = board_from_str("WWWWW_BBBBB").unwrap();
/// assert_eq!(misplaced_pairs(&start), 25);
///
/// let goal = board_from_str("BBBBB_WWWWW").unwrap();
/// assert_eq!(misplaced_pairs(&goal), 0);
/// ```
pub fn misplaced_pairs(board: &Board) -> u32 {
    let mut misplaced = 0;
    for i in 0..BOARD_LEN {
        if board.get_tile(i) == Tile::White {
            for j in (i + 1)..BOARD_LEN {
                if board.get_tile(j) == Tile::Black {
                    misplaced += 1;
                }
            }
        }
    }
    misplaced
}

/// Sums per-tile Manhattan distances against the standard layout, treating
/// cell `k` of the row as cell `(k / 5, k % 5)` of a 5-wide grid.
///
/// Each non-blank tile is matched to the FIRST cell of its colour in the
/// [`Board::standard`] reference layout (index 0 for white, index 6 for
/// black), never to the truly nearest one. The first-occurrence match and
/// the reference layout are part of this function's contract; swapping in a
/// nearest-match changes every estimate. The value measures displacement
/// from the standard layout, so it is zero there and grows as boards move
/// away from it.
pub fn manhattan_distance(board: &Board) -> u32 {
    let reference = Board::standard();
    let mut distance = 0;
    for i in 0..BOARD_LEN {
        let tile = board.get_tile(i);
        if tile == Tile::Blank {
            continue;
        }
        if let Some(target) = (0..BOARD_LEN).find(|&j| reference.get_tile(j) == tile) {
            let row_delta = (i / GRID_WIDTH).abs_diff(target / GRID_WIDTH);
            let col_delta = (i % GRID_WIDTH).abs_diff(target % GRID_WIDTH);
            distance += (row_delta + col_delta) as u32;
        }
    }
    distance
}
