//! Teams, piece kinds and the piece record stored on the board.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::geometry::square::Square;
use crate::rules::rule_component::{standard_rules_for, RuleComponent};

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank step a pawn of this team takes when advancing.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank on which this team's pawns promote.
    #[inline]
    pub const fn far_rank(self) -> i8 {
        match self {
            Team::White => BOARD_SIZE - 1,
            Team::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Team::White => "white",
            Team::Black => "black",
        }
    }
}

/// Piece kind (team is stored separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase notation letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Reads a notation letter: uppercase is white, lowercase is black.
    pub fn from_notation(ch: char) -> Option<(Team, PieceKind)> {
        let team = if ch.is_ascii_uppercase() {
            Team::White
        } else if ch.is_ascii_lowercase() {
            Team::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some((team, kind))
    }
}

/// Stable identity of a piece, assigned by the board when it is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Placeholder carried by a piece that has never been published.
    pub const DETACHED: PieceId = PieceId(u32::MAX);
}

/// A piece together with the ordered rule components that vote on its moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub team: Team,
    pub kind: PieceKind,
    pub square: Square,
    /// Applied moves made by this piece.
    pub move_count: u16,
    pub rules: Vec<RuleComponent>,
}

impl Piece {
    /// A piece carrying exactly the given rules, not yet on any board.
    pub fn with_rules(team: Team, kind: PieceKind, rules: Vec<RuleComponent>) -> Self {
        Self {
            id: PieceId::DETACHED,
            team,
            kind,
            square: Square::new(0, 0),
            move_count: 0,
            rules,
        }
    }

    /// A piece with the standard rule set for its kind.
    pub fn standard(team: Team, kind: PieceKind) -> Self {
        Self::with_rules(team, kind, standard_rules_for(kind))
    }

    /// Notation letter, uppercase for white and lowercase for black.
    pub fn notation(&self) -> char {
        match self.team {
            Team::White => self.kind.letter().to_ascii_uppercase(),
            Team::Black => self.kind.letter(),
        }
    }

    pub fn has_rule(&self, rule: RuleComponent) -> bool {
        self.rules.contains(&rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_casing_follows_team() {
        assert_eq!(Piece::standard(Team::White, PieceKind::Queen).notation(), 'Q');
        assert_eq!(Piece::standard(Team::Black, PieceKind::Knight).notation(), 'n');
        assert_eq!(PieceKind::from_notation('K'), Some((Team::White, PieceKind::King)));
        assert_eq!(PieceKind::from_notation('p'), Some((Team::Black, PieceKind::Pawn)));
        assert_eq!(PieceKind::from_notation('.'), None);
        assert_eq!(PieceKind::from_notation('x'), None);
    }

    #[test]
    fn team_directions_and_edges() {
        assert_eq!(Team::White.forward(), 1);
        assert_eq!(Team::Black.forward(), -1);
        assert_eq!(Team::White.far_rank(), 7);
        assert_eq!(Team::Black.far_rank(), 0);
        assert_eq!(Team::White.opposite(), Team::Black);
    }
}
