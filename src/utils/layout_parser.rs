//! Layout string parsing.
//!
//! A layout is 64 piece characters once whitespace is removed. The first
//! eight are rank 1 from a to h, so the white side reads at the top.
//! Uppercase letters are white pieces, lowercase are black, and `.` or any
//! other character is an empty square.

use tracing::debug;

use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BOARD_SIZE, SQUARE_COUNT};
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::geometry::square::Square;

/// Builds a board of standard pieces from a layout string.
pub fn parse_layout(layout: &str) -> ArbiterResult<Board> {
    let cells: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
    if cells.len() != SQUARE_COUNT {
        return Err(ArbiterError::BadLayout { found: cells.len() });
    }

    let mut board = Board::new_empty();
    for (i, &ch) in cells.iter().enumerate() {
        let Some((team, kind)) = PieceKind::from_notation(ch) else {
            continue;
        };
        let square = Square::try_new(i as i8 % BOARD_SIZE, i as i8 / BOARD_SIZE)?;
        board.publish(Piece::standard(team, kind), square)?;
    }
    debug!(pieces = board.pieces().count(), "layout parsed");
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STANDARD_LAYOUT;
    use crate::game_state::chess_types::Team;

    #[test]
    fn first_row_is_rank_one() {
        let board = parse_layout(STANDARD_LAYOUT).expect("standard layout should parse");
        let a1 = board.occupant_at(Square::new(0, 0)).expect("piece on a1");
        assert_eq!((a1.team, a1.kind), (Team::White, PieceKind::Rook));
        let e8 = board.occupant_at(Square::new(4, 7)).expect("piece on e8");
        assert_eq!((e8.team, e8.kind), (Team::Black, PieceKind::King));
    }

    #[test]
    fn unknown_characters_are_empty() {
        let mut layout = String::from("K?x-");
        layout.push_str(&".".repeat(60));
        let board = parse_layout(&layout).expect("layout should parse");
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            parse_layout("RNBQKBNR").map(|_| ()),
            Err(ArbiterError::BadLayout { found: 8 })
        );
        let long = ".".repeat(65);
        assert!(parse_layout(&long).is_err());
    }
}
