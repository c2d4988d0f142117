//! Mailbox board owning every published piece.
//!
//! The board maps squares to at most one occupant and owns the piece records
//! while they are published. Unpublishing hands the record back to the caller
//! so captured or promoted pieces keep their identity.
//!
//! Speculative queries never mutate a shared board: they work on a clone made
//! by [`Board::speculative_move`], so there is nothing to restore afterwards.

use std::collections::BTreeMap;

use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::chess_rules::{SQUARE_COUNT, STANDARD_LAYOUT};
use crate::game_state::chess_types::{Piece, PieceId, PieceKind, Team};
use crate::geometry::square::Square;
use crate::utils::layout_parser::parse_layout;

/// Square a pawn skipped with its double advance, capturable for one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassantMarker {
    pub square: Square,
    pub victim: PieceId,
    pub team: Team,
}

#[derive(Debug, Clone)]
pub struct Board {
    squares: [Option<PieceId>; SQUARE_COUNT],
    pieces: BTreeMap<PieceId, Piece>,
    en_passant: Option<EnPassantMarker>,
    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
            pieces: BTreeMap::new(),
            en_passant: None,
            next_id: 0,
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn standard() -> ArbiterResult<Self> {
        parse_layout(STANDARD_LAYOUT)
    }

    #[inline]
    pub fn from_layout(layout: &str) -> ArbiterResult<Self> {
        parse_layout(layout)
    }

    /// The piece standing on `square`, if any. Off-board squares are empty.
    pub fn occupant_at(&self, square: Square) -> Option<&Piece> {
        if !square.is_in_bounds() {
            return None;
        }
        self.squares[square.index()].and_then(|id| self.pieces.get(&id))
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupant_at(square).is_some()
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |p| p.team == team)
    }

    pub fn king_of(&self, team: Team) -> Option<&Piece> {
        self.pieces_of(team).find(|p| p.kind == PieceKind::King)
    }

    #[inline]
    pub fn en_passant(&self) -> Option<EnPassantMarker> {
        self.en_passant
    }

    #[inline]
    pub fn set_en_passant(&mut self, marker: Option<EnPassantMarker>) {
        self.en_passant = marker;
    }

    /// Places a piece on an empty square and assigns it a fresh identity.
    pub fn publish(&mut self, mut piece: Piece, square: Square) -> ArbiterResult<PieceId> {
        let index = Self::checked_index(square)?;
        if self.squares[index].is_some() {
            return Err(ArbiterError::SquareOccupied { square });
        }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        piece.id = id;
        piece.square = square;
        self.squares[index] = Some(id);
        self.pieces.insert(id, piece);
        Ok(id)
    }

    /// Takes a piece off the board, returning its record intact.
    pub fn unpublish(&mut self, id: PieceId) -> ArbiterResult<Piece> {
        let piece = self
            .pieces
            .remove(&id)
            .ok_or(ArbiterError::UnknownPiece { id })?;
        self.squares[piece.square.index()] = None;
        if self.en_passant.is_some_and(|m| m.victim == id) {
            self.en_passant = None;
        }
        Ok(piece)
    }

    /// Moves a piece to an empty square without any rule checks.
    ///
    /// Returns the square the piece stood on, so the caller can move it back.
    pub fn relocate(&mut self, id: PieceId, square: Square) -> ArbiterResult<Square> {
        let index = Self::checked_index(square)?;
        let from = self
            .pieces
            .get(&id)
            .map(|p| p.square)
            .ok_or(ArbiterError::UnknownPiece { id })?;
        if self.squares[index].is_some_and(|other| other != id) {
            return Err(ArbiterError::SquareOccupied { square });
        }
        self.squares[from.index()] = None;
        self.squares[index] = Some(id);
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.square = square;
        }
        Ok(from)
    }

    /// Moves a piece, removing whatever it captures.
    ///
    /// A capture is either the occupant of the destination or, for a pawn
    /// landing on an enemy en-passant marker, the marked pawn.
    pub fn perform_move(&mut self, id: PieceId, to: Square) -> ArbiterResult<Option<Piece>> {
        let mover = self.piece(id).ok_or(ArbiterError::UnknownPiece { id })?;
        let (team, kind) = (mover.team, mover.kind);
        Self::checked_index(to)?;

        let victim = match self.occupant_at(to) {
            Some(occupant) if occupant.id != id => Some(occupant.id),
            Some(_) => None,
            None => self
                .en_passant
                .filter(|m| kind == PieceKind::Pawn && m.square == to && m.team != team)
                .map(|m| m.victim),
        };

        let captured = match victim {
            Some(victim) => Some(self.unpublish(victim)?),
            None => None,
        };
        self.relocate(id, to)?;
        Ok(captured)
    }

    /// A copy of the board with the move performed, for speculative queries.
    ///
    /// `None` when the move cannot be performed at all (unknown piece or
    /// off-board destination).
    pub fn speculative_move(&self, id: PieceId, to: Square) -> Option<Board> {
        let mut copy = self.clone();
        copy.perform_move(id, to).ok()?;
        Some(copy)
    }

    /// Bumps the applied-move counter of a piece.
    pub fn record_movement(&mut self, id: PieceId) -> ArbiterResult<()> {
        let piece = self
            .pieces
            .get_mut(&id)
            .ok_or(ArbiterError::UnknownPiece { id })?;
        piece.move_count = piece.move_count.saturating_add(1);
        Ok(())
    }

    fn checked_index(square: Square) -> ArbiterResult<usize> {
        if square.is_in_bounds() {
            Ok(square.index())
        } else {
            Err(ArbiterError::SquareOffBoard {
                file: square.file,
                rank: square.rank,
            })
        }
    }
}
