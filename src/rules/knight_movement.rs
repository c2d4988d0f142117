use crate::geometry::square::delta;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::{Priority, Vote};
use crate::rules::rule_component::{mover, Rule};

/// Allows the 2-1 knight jump regardless of what stands in between.
pub struct KnightMovement;

impl Rule for KnightMovement {
    fn name(&self) -> &'static str {
        "Knight Movement"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        let Some(piece) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        let (d_file, d_rank) = delta(piece.square, proposal.destination);
        match (d_file.abs(), d_rank.abs()) {
            (1, 2) | (2, 1) => Vote::Allow(Priority::PATTERN_MATCH),
            _ => Vote::Abstain,
        }
    }
}
