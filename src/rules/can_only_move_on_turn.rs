use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::{MoveProposal, TAG_PLAYER_MOVEMENT};
use crate::permission::verdict::Vote;
use crate::rules::rule_component::{mover, Rule};

pub const NOT_YOUR_TURN: &str = "It's not this team's turn!";

/// Only allows player movement during the team's turn.
///
/// Moves that are not player-initiated (captures, promotion replacement,
/// speculative queries) pass through untouched.
pub struct CanOnlyMoveOnTurn;

impl Rule for CanOnlyMoveOnTurn {
    fn name(&self) -> &'static str {
        "Can Only Move On Turn"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        if !proposal.tagged(TAG_PLAYER_MOVEMENT) {
            return Vote::Abstain;
        }
        let Some(piece) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        if ctx.current_turn == Some(piece.team) {
            Vote::Abstain
        } else {
            Vote::deny(NOT_YOUR_TURN)
        }
    }
}
