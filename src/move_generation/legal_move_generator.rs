//! Legal move listing.
//!
//! Every piece is asked about every square through the permission vote, so
//! the listing agrees with move validation by construction.

use crate::config::ArbiterConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceId, Team};
use crate::game_state::game_state::GameState;
use crate::geometry::square::Square;
use crate::permission::arbiter::{decide_permission, RuleContext};
use crate::permission::proposal::MoveProposal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

/// Squares `piece` may move to as a player move while `turn` holds the turn.
pub fn legal_destinations(board: &Board, piece: PieceId, turn: Team, config: &ArbiterConfig) -> Vec<Square> {
    if board.piece(piece).is_none() {
        return Vec::new();
    }
    let ctx = RuleContext::new(board, Some(turn), config);
    Square::all()
        .filter(|&to| decide_permission(&MoveProposal::player(piece, to), &ctx).is_permitted())
        .collect()
}

/// Every legal player move for `team`, assuming it holds the turn.
pub fn legal_moves_for_team(board: &Board, team: Team, config: &ArbiterConfig) -> Vec<LegalMove> {
    let mut moves = Vec::with_capacity(64);
    for piece in board.pieces_of(team) {
        for to in legal_destinations(board, piece.id, team, config) {
            moves.push(LegalMove {
                piece: piece.id,
                from: piece.square,
                to,
            });
        }
    }
    moves
}

pub struct LegalMoveGenerator;

impl LegalMoveGenerator {
    /// Legal moves for the side to move.
    pub fn generate_legal_moves(&self, game_state: &GameState) -> Vec<LegalMove> {
        legal_moves_for_team(&game_state.board, game_state.turn, &game_state.config)
    }
}
