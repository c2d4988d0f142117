use tracing::debug;

use crate::check::check_queries::movement_will_result_in_check;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::{MoveProposal, TAG_ATTACK_QUERY};
use crate::permission::verdict::Vote;
use crate::rules::rule_component::{mover, Rule};

pub const EXPOSES_KING: &str = "Move would leave the king in check.";

/// Denies any move after which the mover's own king is attacked.
///
/// Attack queries skip this rule: a piece still gives check while pinned.
/// At the depth cap the rule abstains, so nested queries terminate.
pub struct CannotExposeKing;

impl Rule for CannotExposeKing {
    fn name(&self) -> &'static str {
        "Cannot Expose King"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        if proposal.tagged(TAG_ATTACK_QUERY) {
            return Vote::Abstain;
        }
        if proposal.query_depth >= ctx.config.max_query_depth {
            debug!(
                mover = ?proposal.mover,
                depth = proposal.query_depth,
                "query depth cap reached, skipping self-check test"
            );
            return Vote::Abstain;
        }
        let Some(piece) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        if movement_will_result_in_check(
            ctx.board,
            piece.id,
            proposal.destination,
            proposal.query_depth,
            ctx.config,
        ) {
            Vote::deny(EXPOSES_KING)
        } else {
            Vote::Abstain
        }
    }
}
