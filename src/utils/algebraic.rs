//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and [`Square`]
//! values for layout, export and CLI code.

use crate::errors::{ArbiterError, ArbiterResult};
use crate::geometry::square::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> ArbiterResult<Square> {
    let invalid = || ArbiterError::InvalidAlgebraic {
        text: text.to_owned(),
    };
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok(Square::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ArbiterResult<String> {
    if !square.is_in_bounds() {
        return Err(ArbiterError::SquareOffBoard {
            file: square.file,
            rank: square.rank,
        });
    }
    Ok(square.to_string())
}
