//! Errors used throughout the arbiter.
//!
//! Rule evaluation itself never fails: an illegal move attempt is an expected
//! runtime event and resolves to a denied verdict. `ArbiterError` covers the
//! surfaces around it that can genuinely go wrong, which are board setup,
//! notation parsing, piece lookup and configuration.

use thiserror::Error;

use crate::game_state::chess_types::PieceId;
use crate::geometry::square::Square;

/// Unified error type for the arbiter crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArbiterError {
    /// A layout string did not contain exactly 64 significant characters.
    ///
    /// This is a configuration error at game start and the only fatal
    /// condition of board setup.
    #[error("Bad layout string passed: expected 64 squares, found {found}")]
    BadLayout { found: usize },

    /// Text that could not be read as an algebraic square such as `e4`.
    #[error("Invalid algebraic square: {text}")]
    InvalidAlgebraic { text: String },

    /// A coordinate outside the 8x8 board was used where a board square is required.
    #[error("Square ({file}, {rank}) is off the board")]
    SquareOffBoard { file: i8, rank: i8 },

    /// No piece is published at the given square.
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// No published piece carries the given identity.
    #[error("No published piece with id {id:?}")]
    UnknownPiece { id: PieceId },

    /// Publishing or relocating would put two pieces on one square.
    #[error("Square {square} is already occupied")]
    SquareOccupied { square: Square },

    /// A configuration option name or value was rejected.
    #[error("Invalid option {name}={value}")]
    InvalidOption { name: String, value: String },
}

/// Result type alias for arbiter operations.
pub type ArbiterResult<T> = Result<T, ArbiterError>;
