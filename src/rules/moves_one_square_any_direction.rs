use crate::geometry::square::chebyshev_distance;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::{Priority, Vote};
use crate::rules::rule_component::{mover, Rule};

/// King step: one square in any of the eight directions.
pub struct MovesOneSquareAnyDirection;

impl Rule for MovesOneSquareAnyDirection {
    fn name(&self) -> &'static str {
        "Moves One Square Any Direction"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        match mover(proposal, ctx) {
            Some(piece) if chebyshev_distance(piece.square, proposal.destination) == 1 => {
                Vote::Allow(Priority::PATTERN_MATCH)
            }
            _ => Vote::Abstain,
        }
    }
}
