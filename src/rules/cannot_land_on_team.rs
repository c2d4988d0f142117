use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::Vote;
use crate::rules::rule_component::{mover, Rule};

pub const LANDS_ON_OWN_PIECE: &str = "You cannot move onto your own piece.";

/// Pure blocker: denies landing on a friendly piece, never allows.
pub struct CannotLandOnTeam;

impl Rule for CannotLandOnTeam {
    fn name(&self) -> &'static str {
        "Cannot Land On Team"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        let Some(piece) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        match ctx.board.occupant_at(proposal.destination) {
            Some(occupant) if occupant.id != piece.id && occupant.team == piece.team => {
                Vote::deny(LANDS_ON_OWN_PIECE)
            }
            _ => Vote::Abstain,
        }
    }
}
