//! Core board engine for the linear tile-swap puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Tile`: the three cell states (white tile, black tile, blank).
//! - `Board`: an 11-cell row holding five white tiles, five black tiles and
//!   a single blank, together with the legal blank moves (adjacent swaps and
//!   jump swaps), the goal test, and seeded scrambling.
//! - `Game`: manages a manual play-through, including accumulated move cost,
//!   step count, and history (for undo).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use thiserror::Error;

/// Represents the content of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A white tile.
    White,
    /// A black tile.
    Black,
    /// The single empty cell the tiles are swapped into.
    Blank,
}

impl Tile {
    /// Converts the tile to its character representation.
    ///
    /// This is used for text-based display and parsing of boards.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileswap_solver::engine::Tile;
    /// assert_eq!(Tile::White.to_char(), 'W');
    /// assert_eq!(Tile::Blank.to_char(), '_');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Tile::White => 'W',
            Tile::Black => 'B',
            Tile::Blank => '_',
        }
    }

    /// Parses a tile from its character representation, the inverse of
    /// [`Tile::to_char`]. Returns `None` for any other character.
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            'W' => Some(Tile::White),
            'B' => Some(Tile::Black),
            '_' => Some(Tile::Blank),
            _ => None,
        }
    }
}

/// Number of cells on the board.
pub const BOARD_LEN: usize = 11;

/// Number of white tiles on a legal board.
pub const WHITE_TILES: usize = 5;

/// Number of black tiles on a legal board.
pub const BLACK_TILES: usize = 5;

/// Candidate displacements for the blank, in the order they are tried.
///
/// Magnitude 1 is an adjacent swap (cost 1); magnitudes 2 and 3 are jump
/// swaps over one intervening tile (cost 2 and 3 respectively).
pub const MOVE_OFFSETS: [isize; 6] = [-1, 1, -2, 2, -3, 3];

/// Errors produced when constructing a board from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The input did not contain exactly [`BOARD_LEN`] cells.
    #[error("expected {expected} cells, found {0}", expected = BOARD_LEN)]
    WrongLength(usize),
    /// The input contained a character that is not 'W', 'B' or '_'.
    #[error("unrecognized tile character '{0}'")]
    UnknownTile(char),
    /// The tile multiset was wrong (anything other than 5 white, 5 black
    /// and a single blank).
    #[error(
        "expected {want_whites} white, {want_blacks} black and 1 blank tile, found {whites} white, {blacks} black, {blanks} blank",
        want_whites = WHITE_TILES,
        want_blacks = BLACK_TILES
    )]
    BadTileCounts {
        whites: usize,
        blacks: usize,
        blanks: usize,
    },
}

/// An 11-cell puzzle configuration.
///
/// A `Board` always holds exactly five white tiles, five black tiles and one
/// blank; every constructor enforces this, so any `Board` value in the
/// program is legal. Moves never mutate a board in place, they produce a new
/// one via [`Board::apply_offset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Tile; BOARD_LEN],
    blank: usize,
}

impl Board {
    /// Returns the standard starting configuration `WWWWW_BBBBB`: all white
    /// tiles on the left, all black tiles on the right, blank in the middle.
    ///
    /// This layout is also the reference used by
    /// [`crate::heuristics::manhattan_distance`].
    pub fn standard() -> Self {
        let mut cells = [Tile::Black; BOARD_LEN];
        for cell in cells.iter_mut().take(WHITE_TILES) {
            *cell = Tile::White;
        }
        cells[WHITE_TILES] = Tile::Blank;
        Board {
            cells,
            blank: WHITE_TILES,
        }
    }

    /// Builds a board from an explicit cell array, validating the tile
    /// multiset.
    ///
    /// # Arguments
    /// * `cells`: the 11 cells, left to right.
    ///
    /// # Returns
    /// * `Ok(Board)` if the cells contain exactly 5 white tiles, 5 black
    ///   tiles and 1 blank.
    /// * `Err(BoardError::BadTileCounts)` otherwise.
    pub fn from_cells(cells: [Tile; BOARD_LEN]) -> Result<Self, BoardError> {
        let mut whites = 0;
        let mut blacks = 0;
        let mut blanks = 0;
        let mut blank = 0;
        for (i, tile) in cells.iter().enumerate() {
            match tile {
                Tile::White => whites += 1,
                Tile::Black => blacks += 1,
                Tile::Blank => {
                    blanks += 1;
                    blank = i;
                }
            }
        }
        if whites != WHITE_TILES || blacks != BLACK_TILES || blanks != 1 {
            return Err(BoardError::BadTileCounts {
                whites,
                blacks,
                blanks,
            });
        }
        Ok(Board { cells, blank })
    }

    /// Returns the tile at cell `i`.
    ///
    /// # Panics
    /// Panics if `i >= BOARD_LEN`.
    pub fn get_tile(&self, i: usize) -> Tile {
        self.cells[i]
    }

    /// Returns an immutable reference to the underlying cell array.
    pub fn cells(&self) -> &[Tile; BOARD_LEN] {
        &self.cells
    }

    /// Index of the blank cell.
    pub fn blank_pos(&self) -> usize {
        self.blank
    }

    /// Tests whether this board satisfies the goal condition.
    ///
    /// The test is a single left-to-right scan: seeing a black tile after at
    /// least one white tile has already appeared fails the board. A board
    /// therefore is a goal exactly when every black tile sits left of every
    /// white tile, with the blank anywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileswap_solver::utils::board_from_str;
    /// assert!(board_from_str("BBBBB_WWWWW").unwrap().is_goal());
    /// assert!(board_from_str("BBB_BBWWWWW").unwrap().is_goal());
    /// assert!(!board_from_str("WWWWW_BBBBB").unwrap().is_goal());
    /// ```
    pub fn is_goal(&self) -> bool {
        let mut seen_white = false;
        for tile in &self.cells {
            match tile {
                Tile::White => seen_white = true,
                Tile::Black if seen_white => return false,
                _ => {}
            }
        }
        true
    }

    /// Attempts to displace the blank by `offset` cells, swapping it with
    /// the tile at the target cell.
    ///
    /// Legality rules:
    /// - the target cell must be on the board;
    /// - for jump swaps (magnitude 2 or 3), the midpoint cell
    ///   `blank + offset.div_euclid(2)` must hold a tile to leap over.
    ///
    /// # Returns
    /// `Some((board, cost))` with the resulting board and the move cost
    /// (the offset magnitude), or `None` if the move is illegal.
    pub fn apply_offset(&self, offset: isize) -> Option<(Board, u32)> {
        let target = self.blank as isize + offset;
        if target < 0 || target >= BOARD_LEN as isize {
            return None;
        }
        if offset.abs() > 1 {
            // Floor division, so -3 probes the cell two to the left.
            let midpoint = self.blank as isize + offset.div_euclid(2);
            if self.cells[midpoint as usize] == Tile::Blank {
                return None;
            }
        }
        let target = target as usize;
        let mut cells = self.cells;
        cells.swap(self.blank, target);
        Some((
            Board {
                cells,
                blank: target,
            },
            offset.unsigned_abs() as u32,
        ))
    }

    /// Enumerates every board reachable in one move, paired with the cost of
    /// the move that produces it.
    ///
    /// Offsets whose target falls off the board are skipped silently. The
    /// tile multiset is conserved by construction, since a move only swaps
    /// two cells.
    pub fn neighbors(&self) -> Vec<(Board, u32)> {
        MOVE_OFFSETS
            .iter()
            .filter_map(|&offset| self.apply_offset(offset))
            .collect()
    }

    /// Creates a reproducible scrambled board by applying `moves` random
    /// legal moves to the standard configuration.
    ///
    /// The same seed always produces the same board. Because scrambling only
    /// ever applies legal moves, every board this returns is reachable from
    /// the standard layout.
    ///
    /// # Arguments
    /// * `seed`: seed for the random number generator.
    /// * `moves`: number of random move attempts (illegal picks are skipped,
    ///   so the walk may be shorter).
    pub fn new_scrambled_with_seed(seed: u64, moves: u32) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::standard();
        for _ in 0..moves {
            let offset = MOVE_OFFSETS[rng.gen_range(0..MOVE_OFFSETS.len())];
            if let Some((next, _)) = board.apply_offset(offset) {
                board = next;
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// Formats the board as its 11-character string, e.g. `WWWWW_BBBBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.cells {
            write!(f, "{}", tile.to_char())?;
        }
        Ok(())
    }
}

/// Manages the state and progression of a manual play-through.
///
/// This struct wraps a [`Board`] with the accumulated move cost, the number
/// of moves made, and a history of previous states so moves can be undone.
///
/// # Examples
/// ```
/// use tileswap_solver::engine::Game;
///
/// let mut game = Game::new();
/// assert_eq!(game.cost(), 0);
///
/// // Jump the blank two cells to the right.
/// assert!(game.process_move(2));
/// assert_eq!(game.cost(), 2);
/// assert_eq!(game.steps(), 1);
///
/// assert!(game.undo_last_move());
/// assert_eq!(game.cost(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    cost: u32,
    steps: u32,
    history: Vec<(Board, u32, u32)>,
}

impl Game {
    /// Creates a new game starting from the standard configuration.
    pub fn new() -> Self {
        Game::new_with_board(Board::standard())
    }

    /// Creates a new game starting from the given board.
    pub fn new_with_board(initial_board: Board) -> Self {
        Game {
            board: initial_board,
            cost: 0,
            steps: 0,
            history: vec![(initial_board, 0, 0)],
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Total cost of all moves made so far.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of moves made so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Attempts to displace the blank by `offset`.
    ///
    /// On success the move cost is added to the running total, the step
    /// counter is incremented, and the new state is saved to the history for
    /// undo.
    ///
    /// # Returns
    /// `true` if the move was legal and applied, `false` otherwise.
    pub fn process_move(&mut self, offset: isize) -> bool {
        match self.board.apply_offset(offset) {
            Some((board, move_cost)) => {
                self.board = board;
                self.cost += move_cost;
                self.steps += 1;
                self.history.push((self.board, self.cost, self.steps));
                true
            }
            None => false,
        }
    }

    /// Undoes the last move, reverting board, cost and step count.
    ///
    /// # Returns
    /// `true` if a move was undone, `false` if no moves have been made yet.
    pub fn undo_last_move(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            let &(board, cost, steps) = self
                .history
                .last()
                .expect("history holds at least the initial state");
            self.board = board;
            self.cost = cost;
            self.steps = steps;
            true
        } else {
            false
        }
    }

    /// Whether the current board satisfies the goal condition.
    pub fn is_solved(&self) -> bool {
        self.board.is_goal()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str;

    fn tile_counts(board: &Board) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for i in 0..BOARD_LEN {
            match board.get_tile(i) {
                Tile::White => counts.0 += 1,
                Tile::Black => counts.1 += 1,
                Tile::Blank => counts.2 += 1,
            }
        }
        counts
    }

    #[test]
    fn test_standard_board_layout() {
        let board = Board::standard();
        assert_eq!(board.to_string(), "WWWWW_BBBBB");
        assert_eq!(board.blank_pos(), 5);
        assert_eq!(tile_counts(&board), (WHITE_TILES, BLACK_TILES, 1));
    }

    #[test]
    fn test_tile_char_round_trip() {
        for tile in [Tile::White, Tile::Black, Tile::Blank] {
            assert_eq!(Tile::from_char(tile.to_char()), Some(tile));
        }
        assert_eq!(Tile::from_char('x'), None);
    }

    #[test]
    fn test_from_cells_rejects_bad_counts() {
        let mut cells = *Board::standard().cells();
        cells[0] = Tile::Black; // 4 white, 6 black
        match Board::from_cells(cells) {
            Err(BoardError::BadTileCounts {
                whites,
                blacks,
                blanks,
            }) => {
                assert_eq!((whites, blacks, blanks), (4, 6, 1));
            }
            other => panic!("expected BadTileCounts, got {:?}", other),
        }
    }

    #[test]
    fn test_goal_scan_rule() {
        assert!(board_from_str("BBBBB_WWWWW").unwrap().is_goal());
        assert!(board_from_str("_BBBBBWWWWW").unwrap().is_goal());
        assert!(board_from_str("BBBB_BWWWWW").unwrap().is_goal());
        assert!(board_from_str("BBBBBWWWWW_").unwrap().is_goal());
        // A single white left of any black fails the scan.
        assert!(!board_from_str("WWWWW_BBBBB").unwrap().is_goal());
        assert!(!board_from_str("BWBBB_BWWWW").unwrap().is_goal());
        assert!(!board_from_str("WBWBW_BWBWB").unwrap().is_goal());
    }

    #[test]
    fn test_adjacent_swap() {
        let board = Board::standard();

        let (right, cost) = board.apply_offset(1).unwrap();
        assert_eq!(right.to_string(), "WWWWWB_BBBB");
        assert_eq!(right.blank_pos(), 6);
        assert_eq!(cost, 1);

        let (left, cost) = board.apply_offset(-1).unwrap();
        assert_eq!(left.to_string(), "WWWW_WBBBBB");
        assert_eq!(cost, 1);
    }

    #[test]
    fn test_jump_swaps() {
        let board = Board::standard();

        let (jump2, cost) = board.apply_offset(2).unwrap();
        assert_eq!(jump2.to_string(), "WWWWWBB_BBB");
        assert_eq!(cost, 2);

        let (jump3, cost) = board.apply_offset(3).unwrap();
        assert_eq!(jump3.to_string(), "WWWWWBBB_BB");
        assert_eq!(cost, 3);

        let (jump_back, cost) = board.apply_offset(-3).unwrap();
        assert_eq!(jump_back.to_string(), "WW_WWWBBBBB");
        assert_eq!(cost, 3);
    }

    #[test]
    fn test_out_of_bounds_moves_are_skipped() {
        let board = board_from_str("BBBBBWWWWW_").unwrap();
        assert_eq!(board.blank_pos(), 10);
        assert!(board.apply_offset(1).is_none());
        assert!(board.apply_offset(2).is_none());
        assert!(board.apply_offset(3).is_none());
        // Only the three leftward moves remain.
        assert_eq!(board.neighbors().len(), 3);
    }

    #[test]
    fn test_neighbors_of_standard_board() {
        let neighbors = Board::standard().neighbors();
        assert_eq!(neighbors.len(), 6);
        let mut costs: Vec<u32> = neighbors.iter().map(|&(_, c)| c).collect();
        costs.sort_unstable();
        assert_eq!(costs, vec![1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_neighbors_conserve_tiles() {
        let boards = [
            Board::standard(),
            board_from_str("WBWBW_BWBWB").unwrap(),
            Board::new_scrambled_with_seed(7, 40),
        ];
        for board in boards {
            for (neighbor, cost) in board.neighbors() {
                assert_eq!(tile_counts(&neighbor), (WHITE_TILES, BLACK_TILES, 1));
                assert!((1..=3).contains(&cost));
            }
        }
    }

    #[test]
    fn test_scramble_is_deterministic_and_legal() {
        let a = Board::new_scrambled_with_seed(42, 60);
        let b = Board::new_scrambled_with_seed(42, 60);
        assert_eq!(a, b);
        assert_eq!(tile_counts(&a), (WHITE_TILES, BLACK_TILES, 1));

        let distinct: std::collections::HashSet<Board> =
            (0..8).map(|seed| Board::new_scrambled_with_seed(seed, 60)).collect();
        assert!(distinct.len() > 1, "seeds should not all scramble alike");
    }

    #[test]
    fn test_game_moves_and_undo() {
        let mut game = Game::new();
        assert!(!game.is_solved());

        assert!(game.process_move(2));
        assert_eq!(game.board().to_string(), "WWWWWBB_BBB");
        assert_eq!(game.cost(), 2);
        assert_eq!(game.steps(), 1);

        assert!(game.process_move(1));
        assert_eq!(game.cost(), 3);
        assert_eq!(game.steps(), 2);

        assert!(game.undo_last_move());
        assert_eq!(game.board().to_string(), "WWWWWBB_BBB");
        assert_eq!(game.cost(), 2);
        assert_eq!(game.steps(), 1);

        assert!(game.undo_last_move());
        assert_eq!(game.board(), &Board::standard());
        assert!(!game.undo_last_move(), "initial state cannot be undone");
    }

    #[test]
    fn test_game_rejects_illegal_move() {
        let mut game = Game::new_with_board(board_from_str("_WWWWBBBBBW").unwrap());
        assert!(!game.process_move(-1));
        assert_eq!(game.cost(), 0);
        assert_eq!(game.steps(), 0);
    }

    #[test]
    fn test_game_detects_goal() {
        let game = Game::new_with_board(board_from_str("BBBBB_WWWWW").unwrap());
        assert!(game.is_solved());
    }
}
