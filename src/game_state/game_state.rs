//! Full-game bookkeeping around the board.
//!
//! `GameState` owns the board and the turn token, and is the one place where
//! proposals are turned into applied moves. After each applied move it
//! updates clocks, the en-passant marker, holding areas for captured pieces,
//! runs promotion, passes the turn and snapshots the check state of the side
//! to move.

use tracing::{debug, info};

use crate::check::types_of_check::{inspect_check, CheckState};
use crate::config::ArbiterConfig;
use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::board::{Board, EnPassantMarker};
use crate::game_state::chess_types::{Piece, PieceId, PieceKind, Team};
use crate::geometry::square::{delta, Square};
use crate::move_generation::legal_move_generator::{legal_moves_for_team, LegalMove};
use crate::permission::arbiter::{decide_permission, RuleContext};
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::Verdict;
use crate::rules::queens::{apply_promotion, decide_promotion, promotion_intent};
use crate::utils::algebraic::algebraic_to_square;

/// One applied move, as kept in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub team: Team,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    /// Identity of the queen that replaced the pawn, if it promoted.
    pub promoted_to: Option<PieceId>,
    /// Applied without a permission vote.
    pub forced: bool,
    /// Check state of the opponent right after the move.
    pub check: Option<CheckState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(MoveRecord),
    Denied { reason: &'static str },
}

impl MoveOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    /// Team holding the turn token.
    pub turn: Team,
    /// Player moves since the last pawn move or capture.
    pub half_move_clock: u16,
    /// Starts at 1 and increments after black moves.
    pub full_move_number: u16,
    /// Holding areas indexed by the capturing team.
    pub captured: [Vec<Piece>; 2],
    /// Check state of the side to move, taken after every applied move.
    pub check: Option<CheckState>,
    pub history: Vec<MoveRecord>,
    pub config: ArbiterConfig,
}

impl GameState {
    fn from_board(board: Board, turn: Team, config: ArbiterConfig) -> Self {
        let check = inspect_check(&board, turn, &config);
        Self {
            board,
            turn,
            half_move_clock: 0,
            full_move_number: 1,
            captured: [Vec::new(), Vec::new()],
            check,
            history: Vec::new(),
            config,
        }
    }

    /// The standard opening position, white to move.
    pub fn new_game() -> ArbiterResult<Self> {
        Ok(Self::from_board(Board::standard()?, Team::White, ArbiterConfig::default()))
    }

    /// A custom layout with `turn` to move.
    pub fn from_layout(layout: &str, turn: Team) -> ArbiterResult<Self> {
        Ok(Self::from_board(Board::from_layout(layout)?, turn, ArbiterConfig::default()))
    }

    pub fn with_config(mut self, config: ArbiterConfig) -> Self {
        self.config = config;
        self.check = inspect_check(&self.board, self.turn, &self.config);
        self
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.board.en_passant().map(|m| m.square)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.check.as_ref().is_some_and(CheckState::is_checkmate)
    }

    /// Pieces `team` has captured so far.
    #[inline]
    pub fn captured_by(&self, team: Team) -> &[Piece] {
        &self.captured[team.index()]
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        legal_moves_for_team(&self.board, self.turn, &self.config)
    }

    /// Runs the permission vote for moving the piece on `from` to `to`.
    pub fn propose(&self, from: Square, to: Square) -> ArbiterResult<Verdict> {
        let mover = self.piece_id_at(from)?;
        let ctx = RuleContext::new(&self.board, Some(self.turn), &self.config);
        Ok(decide_permission(&MoveProposal::player(mover, to), &ctx))
    }

    /// Applies a player move if the vote permits it.
    pub fn move_piece(&mut self, from: Square, to: Square) -> ArbiterResult<MoveOutcome> {
        match self.propose(from, to)? {
            Verdict::Allowed(_) => Ok(MoveOutcome::Applied(self.apply(from, to, false)?)),
            verdict => {
                let reason = verdict.reason().unwrap_or_default();
                debug!(%from, %to, reason, "move denied");
                Ok(MoveOutcome::Denied { reason })
            }
        }
    }

    /// [`GameState::move_piece`] with algebraic squares such as `"e2"`.
    pub fn move_algebraic(&mut self, from: &str, to: &str) -> ArbiterResult<MoveOutcome> {
        self.move_piece(algebraic_to_square(from)?, algebraic_to_square(to)?)
    }

    /// Applies a move without asking the rules, for setting up positions.
    ///
    /// Landing on a piece of the mover's own team is still refused.
    pub fn force_move(&mut self, from: Square, to: Square) -> ArbiterResult<MoveRecord> {
        self.apply(from, to, true)
    }

    fn piece_id_at(&self, square: Square) -> ArbiterResult<PieceId> {
        self.board
            .occupant_at(square)
            .map(|p| p.id)
            .ok_or(ArbiterError::NoPieceAtSquare { square })
    }

    fn apply(&mut self, from: Square, to: Square, forced: bool) -> ArbiterResult<MoveRecord> {
        let id = self.piece_id_at(from)?;
        let (team, kind) = self
            .board
            .piece(id)
            .map(|p| (p.team, p.kind))
            .ok_or(ArbiterError::UnknownPiece { id })?;
        if self.board.occupant_at(to).is_some_and(|p| p.team == team && p.id != id) {
            return Err(ArbiterError::SquareOccupied { square: to });
        }

        let captured = self.board.perform_move(id, to)?;
        self.board.record_movement(id)?;

        let (d_file, d_rank) = delta(from, to);
        let double_step = kind == PieceKind::Pawn && d_file == 0 && d_rank == 2 * team.forward();
        let marker = if double_step {
            from.offset(0, team.forward()).map(|square| EnPassantMarker {
                square,
                victim: id,
                team,
            })
        } else {
            None
        };
        self.board.set_en_passant(marker);

        let captured_kind = captured.as_ref().map(|p| p.kind);
        if let Some(piece) = captured {
            info!(
                captor = team.name(),
                captured = %piece.notation(),
                square = %piece.square,
                "piece captured"
            );
            self.captured[team.index()].push(piece);
        }

        let mut promoted_to = None;
        if let Some(intent) = promotion_intent(&self.board, id) {
            let ctx = RuleContext::speculative(&self.board, &self.config);
            if decide_promotion(&intent, &ctx).is_permitted() {
                promoted_to = Some(apply_promotion(&mut self.board, &intent)?.queen);
            }
        }

        if kind == PieceKind::Pawn || captured_kind.is_some() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }
        if team == Team::Black {
            self.full_move_number = self.full_move_number.saturating_add(1);
        }

        self.turn = team.opposite();
        self.check = inspect_check(&self.board, self.turn, &self.config);

        let record = MoveRecord {
            piece: id,
            team,
            kind,
            from,
            to,
            captured: captured_kind,
            promoted_to,
            forced,
            check: self.check.clone(),
        };
        info!(
            team = team.name(),
            %from,
            %to,
            forced,
            check = self.check.is_some(),
            "move applied"
        );
        self.history.push(record.clone());
        Ok(record)
    }
}
