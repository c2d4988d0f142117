//! Promotion to a queen on the far rank.
//!
//! Promotion is two-phase: a [`PromotionIntent`] is voted on by the pawn's
//! rules, and only an accepted intent is applied. The pawn is retired and a
//! fresh queen of the same team is published on the same square.

use tracing::info;

use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceId, PieceKind};
use crate::geometry::square::Square;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::{Ballot, Priority, Verdict, Vote};
use crate::rules::rule_component::{Rule, RuleComponent};

/// A request to replace `piece` with a queen on `square`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionIntent {
    pub piece: PieceId,
    pub square: Square,
}

/// Result of an applied promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionOutcome {
    pub retired: Piece,
    pub queen: PieceId,
}

/// Marks a piece as promotable and accepts its promotion intents.
pub struct Queens;

impl Rule for Queens {
    fn name(&self) -> &'static str {
        "Queens"
    }

    fn evaluate(&self, _proposal: &MoveProposal, _ctx: &RuleContext<'_>) -> Vote {
        Vote::Abstain
    }

    fn evaluate_promotion(&self, intent: &PromotionIntent, ctx: &RuleContext<'_>) -> Vote {
        match ctx.board.piece(intent.piece) {
            Some(piece) if piece.square == intent.square => Vote::Allow(Priority::PATTERN_MATCH),
            _ => Vote::Abstain,
        }
    }
}

/// The promotion a piece is due after landing where it stands, if any.
pub fn promotion_intent(board: &Board, id: PieceId) -> Option<PromotionIntent> {
    let piece = board.piece(id)?;
    if piece.has_rule(RuleComponent::Queens) && piece.square.rank == piece.team.far_rank() {
        Some(PromotionIntent {
            piece: id,
            square: piece.square,
        })
    } else {
        None
    }
}

/// Lets every rule on the piece vote on the intent.
pub fn decide_promotion(intent: &PromotionIntent, ctx: &RuleContext<'_>) -> Verdict {
    let mut ballot = Ballot::new();
    if let Some(piece) = ctx.board.piece(intent.piece) {
        for rule in &piece.rules {
            ballot.cast(rule.evaluate_promotion(intent, ctx));
        }
    }
    ballot.decide()
}

/// Retires the pawn and publishes a queen of its team on the same square.
pub fn apply_promotion(board: &mut Board, intent: &PromotionIntent) -> ArbiterResult<PromotionOutcome> {
    let current = board
        .piece(intent.piece)
        .map(|p| p.square)
        .ok_or(ArbiterError::UnknownPiece { id: intent.piece })?;
    if current != intent.square {
        return Err(ArbiterError::NoPieceAtSquare {
            square: intent.square,
        });
    }
    let retired = board.unpublish(intent.piece)?;
    let queen = board.publish(Piece::standard(retired.team, PieceKind::Queen), intent.square)?;
    info!(
        team = retired.team.name(),
        square = %intent.square,
        "pawn promoted to queen"
    );
    Ok(PromotionOutcome { retired, queen })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArbiterConfig;
    use crate::game_state::chess_types::Team;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn pawn_on_far_rank_is_replaced_by_queen() {
        let mut board = Board::new_empty();
        let pawn = board
            .publish(Piece::standard(Team::Black, PieceKind::Pawn), sq("c1"))
            .expect("empty square");
        let intent = promotion_intent(&board, pawn).expect("black pawn on rank 1 promotes");
        let config = ArbiterConfig::default();
        let verdict = decide_promotion(&intent, &RuleContext::speculative(&board, &config));
        assert!(verdict.is_permitted());

        let outcome = apply_promotion(&mut board, &intent).expect("promotion applies");
        assert_eq!(outcome.retired.id, pawn);
        assert!(board.piece(pawn).is_none());
        let queen = board.occupant_at(sq("c1")).expect("queen on c1");
        assert_eq!(queen.id, outcome.queen);
        assert_eq!(queen.notation(), 'q');
        assert_eq!(queen.team, Team::Black);
    }

    #[test]
    fn no_intent_away_from_far_rank() {
        let mut board = Board::new_empty();
        let pawn = board
            .publish(Piece::standard(Team::White, PieceKind::Pawn), sq("c1"))
            .expect("empty square");
        let rook = board
            .publish(Piece::standard(Team::White, PieceKind::Rook), sq("a8"))
            .expect("empty square");
        assert_eq!(promotion_intent(&board, pawn), None);
        assert_eq!(promotion_intent(&board, rook), None);
    }

    #[test]
    fn intent_without_queens_rule_is_denied() {
        let mut board = Board::new_empty();
        let piece = board
            .publish(
                Piece::with_rules(Team::White, PieceKind::Pawn, vec![RuleComponent::MovesOneSquareForward]),
                sq("d8"),
            )
            .expect("empty square");
        let intent = PromotionIntent {
            piece,
            square: sq("d8"),
        };
        let config = ArbiterConfig::default();
        let verdict = decide_promotion(&intent, &RuleContext::speculative(&board, &config));
        assert!(!verdict.is_permitted());
    }
}
