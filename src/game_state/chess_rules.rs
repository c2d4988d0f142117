//! Canonical chess-rule constants.
//!
//! Board dimensions, the standard starting layout and the default bound on
//! nested speculative queries.

/// Files and ranks per side of the board.
pub const BOARD_SIZE: i8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

/// Standard starting position as a layout string.
///
/// The first row is rank 1, so white (uppercase) sits at the top of the text.
pub const STANDARD_LAYOUT: &str = "
    RNBQKBNR
    PPPPPPPP
    ........
    ........
    ........
    ........
    pppppppp
    rnbqkbnr
";

/// Deepest speculative query nesting evaluated before answering conservatively.
///
/// Depth 0 is a real move; depth 1 is a query made on its behalf (self-check,
/// king escape); depth 2 is the attack scan inside such a query.
pub const DEFAULT_MAX_QUERY_DEPTH: u8 = 2;

/// Lower bound accepted for a configured query depth.
///
/// Checkmate needs king-escape queries at depth 1 to still run the
/// self-check test, which only happens below the cap.
pub const MIN_CONFIGURABLE_QUERY_DEPTH: u8 = 2;

/// Upper bound accepted for a configured query depth.
pub const MAX_CONFIGURABLE_QUERY_DEPTH: u8 = 8;
