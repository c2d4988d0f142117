//! The voting interface shared by all rule components.
//!
//! Rule components form a closed set. A piece owns an ordered `Vec` of
//! [`RuleComponent`] values, and the arbiter asks each one for a [`Vote`]
//! through the [`Rule`] trait.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::Vote;
use crate::rules::can_only_move_on_turn::CanOnlyMoveOnTurn;
use crate::rules::cannot_expose_king::CannotExposeKing;
use crate::rules::cannot_land_on_team::CannotLandOnTeam;
use crate::rules::collides::Collides;
use crate::rules::knight_movement::KnightMovement;
use crate::rules::moves_diagonally::MovesDiagonally;
use crate::rules::moves_one_square_any_direction::MovesOneSquareAnyDirection;
use crate::rules::moves_orthogonally::MovesOrthogonally;
use crate::rules::pawn_movement::{MovesOneSquareForward, MovesTwoSquaresOnFirstMove};
use crate::rules::queens::{PromotionIntent, Queens};

pub trait Rule {
    fn name(&self) -> &'static str;

    /// Examines a move proposal and allows, denies or abstains.
    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote;

    /// Examines a promotion intent. Most rules have no opinion.
    fn evaluate_promotion(&self, _intent: &PromotionIntent, _ctx: &RuleContext<'_>) -> Vote {
        Vote::Abstain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleComponent {
    MovesDiagonally,
    MovesOrthogonally,
    MovesOneSquareAnyDirection,
    KnightMovement,
    MovesOneSquareForward,
    MovesTwoSquaresOnFirstMove,
    Collides,
    CannotLandOnTeam,
    CanOnlyMoveOnTurn,
    CannotExposeKing,
    Queens,
}

impl RuleComponent {
    fn as_rule(&self) -> &'static dyn Rule {
        match self {
            RuleComponent::MovesDiagonally => &MovesDiagonally,
            RuleComponent::MovesOrthogonally => &MovesOrthogonally,
            RuleComponent::MovesOneSquareAnyDirection => &MovesOneSquareAnyDirection,
            RuleComponent::KnightMovement => &KnightMovement,
            RuleComponent::MovesOneSquareForward => &MovesOneSquareForward,
            RuleComponent::MovesTwoSquaresOnFirstMove => &MovesTwoSquaresOnFirstMove,
            RuleComponent::Collides => &Collides,
            RuleComponent::CannotLandOnTeam => &CannotLandOnTeam,
            RuleComponent::CanOnlyMoveOnTurn => &CanOnlyMoveOnTurn,
            RuleComponent::CannotExposeKing => &CannotExposeKing,
            RuleComponent::Queens => &Queens,
        }
    }
}

impl Rule for RuleComponent {
    fn name(&self) -> &'static str {
        self.as_rule().name()
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        self.as_rule().evaluate(proposal, ctx)
    }

    fn evaluate_promotion(&self, intent: &PromotionIntent, ctx: &RuleContext<'_>) -> Vote {
        self.as_rule().evaluate_promotion(intent, ctx)
    }
}

/// The rule set a standard piece of `kind` carries, in attachment order.
///
/// Knights never collide, so they do not get [`RuleComponent::Collides`].
pub fn standard_rules_for(kind: PieceKind) -> Vec<RuleComponent> {
    use RuleComponent::*;

    let mut rules = vec![CanOnlyMoveOnTurn, CannotLandOnTeam];
    match kind {
        PieceKind::Pawn => rules.extend([
            Collides,
            MovesOneSquareForward,
            MovesTwoSquaresOnFirstMove,
            Queens,
        ]),
        PieceKind::Knight => rules.push(KnightMovement),
        PieceKind::Bishop => rules.extend([Collides, MovesDiagonally]),
        PieceKind::Rook => rules.extend([Collides, MovesOrthogonally]),
        PieceKind::Queen => rules.extend([Collides, MovesDiagonally, MovesOrthogonally]),
        PieceKind::King => rules.extend([Collides, MovesOneSquareAnyDirection]),
    }
    rules.push(CannotExposeKing);
    rules
}

/// The moving piece, or `None` when it is not on the board.
#[inline]
pub(crate) fn mover<'a>(proposal: &MoveProposal, ctx: &RuleContext<'a>) -> Option<&'a Piece> {
    ctx.board.piece(proposal.mover)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knights_do_not_collide() {
        assert!(!standard_rules_for(PieceKind::Knight).contains(&RuleComponent::Collides));
        for kind in [PieceKind::Pawn, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen, PieceKind::King] {
            assert!(standard_rules_for(kind).contains(&RuleComponent::Collides), "{kind:?}");
        }
    }

    #[test]
    fn every_standard_piece_is_turn_gated_and_king_safe() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            let rules = standard_rules_for(kind);
            assert!(rules.contains(&RuleComponent::CanOnlyMoveOnTurn));
            assert!(rules.contains(&RuleComponent::CannotLandOnTeam));
            assert_eq!(rules.last(), Some(&RuleComponent::CannotExposeKing));
        }
        assert!(standard_rules_for(PieceKind::Pawn).contains(&RuleComponent::Queens));
        assert_eq!(RuleComponent::Collides.name(), "Collides");
    }
}
