//! Parsing helpers for board configurations.

use crate::engine::{Board, BoardError, Tile, BOARD_LEN};

/// Parses a board from its 11-character string form.
///
/// Valid characters are:
/// - 'W': a white tile
/// - 'B': a black tile
/// - '_': the blank
///
/// The string must be exactly [`BOARD_LEN`] characters and describe a legal
/// tile multiset (5 white, 5 black, 1 blank).
///
/// # Arguments
/// * `s`: the board string, leftmost cell first, e.g. `"WWWWW_BBBBB"`.
///
/// # Returns
/// * `Ok(Board)` if parsing and validation succeed.
/// * `Err(BoardError)` if the string has the wrong length, contains an
///   unrecognized character, or holds the wrong number of any tile.
///
/// # Examples
/// ```
/// use tileswap_solver::utils::board_from_str;
/// use tileswap_solver::engine::{BoardError, Tile};
///
/// let board = board_from_str("WWWWW_BBBBB").unwrap();
/// assert_eq!(board.get_tile(0), Tile::White);
/// assert_eq!(board.blank_pos(), 5);
///
/// assert_eq!(board_from_str("WWWWW"), Err(BoardError::WrongLength(5)));
/// assert!(matches!(
///     board_from_str("WWWWWXBBBBB"),
///     Err(BoardError::UnknownTile('X'))
/// ));
/// ```
pub fn board_from_str(s: &str) -> Result<Board, BoardError> {
    let mut cells = [Tile::Blank; BOARD_LEN];
    let mut len = 0;
    for c in s.chars() {
        if len >= BOARD_LEN {
            return Err(BoardError::WrongLength(s.chars().count()));
        }
        cells[len] = Tile::from_char(c).ok_or(BoardError::UnknownTile(c))?;
        len += 1;
    }
    if len != BOARD_LEN {
        return Err(BoardError::WrongLength(len));
    }
    Board::from_cells(cells)
}
