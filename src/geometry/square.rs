//! Board coordinates and straight-line geometry.
//!
//! `Square` is a plain (file, rank) pair with `a1 == (0, 0)`. It may hold
//! off-board values so that a malformed destination reaches the rule layer
//! and is denied there with a reason, instead of failing earlier.

use std::fmt;

use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::chess_rules::BOARD_SIZE;

/// A file/rank coordinate. Both components are in `0..8` when on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Builds a square, rejecting coordinates outside the board.
    pub fn try_new(file: i8, rank: i8) -> ArbiterResult<Self> {
        let square = Self::new(file, rank);
        if square.is_in_bounds() {
            Ok(square)
        } else {
            Err(ArbiterError::SquareOffBoard { file, rank })
        }
    }

    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Mailbox index (`a1 == 0`, `h8 == 63`). Only meaningful for in-bounds squares.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * (BOARD_SIZE as usize) + self.file as usize
    }

    /// Moves the square by a file and rank offset, staying on the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let moved = Square::new(self.file + d_file, self.rank + d_rank);
        moved.is_in_bounds().then_some(moved)
    }

    /// Every playable square, file-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_bounds() {
            let file = char::from(b'a' + self.file as u8);
            write!(f, "{}{}", file, self.rank + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

/// Coordinate difference `b - a` as `(d_file, d_rank)`.
#[inline]
pub fn delta(a: Square, b: Square) -> (i8, i8) {
    (b.file - a.file, b.rank - a.rank)
}

/// True when `b` lies on a diagonal through `a`, at any non-zero distance.
pub fn is_diagonal(a: Square, b: Square) -> bool {
    let (d_file, d_rank) = delta(a, b);
    d_file != 0 && d_file.abs() == d_rank.abs()
}

/// True when `b` shares exactly one of rank or file with `a`.
pub fn is_orthogonal(a: Square, b: Square) -> bool {
    let (d_file, d_rank) = delta(a, b);
    (d_file == 0) != (d_rank == 0)
}

/// King-step distance between two squares.
pub fn chebyshev_distance(a: Square, b: Square) -> i8 {
    let (d_file, d_rank) = delta(a, b);
    d_file.abs().max(d_rank.abs())
}

/// Squares strictly between `a` and `b` along a rank, file or diagonal.
///
/// Empty when the two squares are not aligned or are adjacent. Each call
/// builds a fresh iterator, so there is no shared traversal state.
pub fn squares_between(a: Square, b: Square) -> SquaresBetween {
    let (d_file, d_rank) = delta(a, b);
    let aligned = is_diagonal(a, b) || is_orthogonal(a, b);
    let distance = chebyshev_distance(a, b);
    let remaining = if aligned { (distance - 1).max(0) as usize } else { 0 };
    SquaresBetween {
        next: a,
        step: (d_file.signum(), d_rank.signum()),
        remaining,
    }
}

/// Iterator returned by [`squares_between`]. Excludes both endpoints.
#[derive(Debug, Clone)]
pub struct SquaresBetween {
    next: Square,
    step: (i8, i8),
    remaining: usize,
}

impl Iterator for SquaresBetween {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.next = Square::new(self.next.file + self.step.0, self.next.rank + self.step.1);
        Some(self.next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SquaresBetween {}
