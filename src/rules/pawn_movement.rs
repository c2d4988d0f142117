//! Pawn movement: single advance, diagonal capture and the opening double step.
//!
//! The forward axis comes from the pawn's team, so the same rules serve both
//! sides of the board.

use crate::geometry::square::delta;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::{Priority, Vote};
use crate::rules::rule_component::{mover, Rule};

pub const TOO_FAR_SIDEWAYS: &str = "Too far to the side!";
pub const DIAGONAL_MUST_CAPTURE: &str = "You can only move diagonally to capture an enemy piece.";
pub const FORWARD_MUST_BE_EMPTY: &str = "Pawns cannot capture moving forward.";

/// One square straight ahead onto an empty square, or one square diagonally
/// ahead onto an enemy piece or an enemy en-passant marker.
pub struct MovesOneSquareForward;

impl Rule for MovesOneSquareForward {
    fn name(&self) -> &'static str {
        "Moves One Square Forward"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        let Some(pawn) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        let to = proposal.destination;
        let (d_file, d_rank) = delta(pawn.square, to);
        let forward = pawn.team.forward();

        if d_file == 0 && d_rank == forward {
            return if ctx.board.is_occupied(to) {
                Vote::deny(FORWARD_MUST_BE_EMPTY)
            } else {
                Vote::Allow(Priority::PATTERN_MATCH)
            };
        }

        if d_file.abs() > 1 {
            return Vote::deny(TOO_FAR_SIDEWAYS);
        }

        if d_file.abs() == 1 && d_rank == forward {
            let enemy_on_square = ctx
                .board
                .occupant_at(to)
                .is_some_and(|occupant| occupant.team != pawn.team);
            let enemy_marker = ctx
                .board
                .en_passant()
                .is_some_and(|marker| marker.square == to && marker.team != pawn.team);
            return if enemy_on_square || enemy_marker {
                Vote::Allow(Priority::SPECIFIC_PATTERN)
            } else {
                Vote::deny(DIAGONAL_MUST_CAPTURE)
            };
        }

        Vote::Abstain
    }
}

/// Two squares straight ahead for a pawn that has not moved yet.
pub struct MovesTwoSquaresOnFirstMove;

impl Rule for MovesTwoSquaresOnFirstMove {
    fn name(&self) -> &'static str {
        "Moves Two Squares On First Move"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        let Some(pawn) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        let to = proposal.destination;
        let (d_file, d_rank) = delta(pawn.square, to);
        if pawn.move_count != 0 || d_file != 0 || d_rank != 2 * pawn.team.forward() {
            return Vote::Abstain;
        }
        if ctx.board.is_occupied(to) {
            return Vote::deny(FORWARD_MUST_BE_EMPTY);
        }
        // The skipped square is covered by `Collides`.
        Vote::Allow(Priority::PATTERN_MATCH)
    }
}
