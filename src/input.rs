//! Turns a typed move token into a [`Move`].

use crate::common::FormatError;

/// A move as requested by the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Place a disc at zero-based `(row, col)`.
    Place { row: usize, col: usize },
    /// Pass the turn without placing.
    Skip,
    /// Resign and end the game.
    Quit,
}

/// Map `A..=Z` (either case) to `0..=25`.
pub fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_alphabetic() {
        Some((ch.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Inverse of [`letter_index`] for headings and messages.
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < 26);
    (b'A' + index as u8) as char
}

/// Parse `skip`, `quit`, or a two-letter `<row><col>` token such as `cd`.
///
/// Range checks against the board are left to the move validator.
pub fn parse_move(input: &str) -> Result<Move, FormatError> {
    let token = input.trim();
    if token.eq_ignore_ascii_case("skip") {
        return Ok(Move::Skip);
    }
    if token.eq_ignore_ascii_case("quit") {
        return Ok(Move::Quit);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(c), None) => {
            let row = letter_index(r).ok_or(FormatError::NotALetter(r))?;
            let col = letter_index(c).ok_or(FormatError::NotALetter(c))?;
            Ok(Move::Place { row, col })
        }
        _ => Err(FormatError::WrongLength(token.chars().count())),
    }
}

/// Format `(row, col)` as the two-letter token a player would type.
pub fn format_coord(row: usize, col: usize) -> [char; 2] {
    [index_letter(row), index_letter(col)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_in_either_case() {
        assert_eq!(parse_move("cd"), Ok(Move::Place { row: 2, col: 3 }));
        assert_eq!(parse_move(" Zb\n"), Ok(Move::Place { row: 25, col: 1 }));
    }

    #[test]
    fn sentinels() {
        assert_eq!(parse_move("skip"), Ok(Move::Skip));
        assert_eq!(parse_move("QUIT"), Ok(Move::Quit));
    }

    #[test]
    fn format_errors() {
        assert_eq!(parse_move(""), Err(FormatError::WrongLength(0)));
        assert_eq!(parse_move("abc"), Err(FormatError::WrongLength(3)));
        assert_eq!(parse_move("a1"), Err(FormatError::NotALetter('1')));
        assert_eq!(parse_move("éa"), Err(FormatError::NotALetter('é')));
    }

    #[test]
    fn coord_letters() {
        assert_eq!(format_coord(2, 3), ['C', 'D']);
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('?'), None);
    }
}
