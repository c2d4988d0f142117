use crate::geometry::square::is_diagonal;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::{Priority, Vote};
use crate::rules::rule_component::{mover, Rule};

/// Allows any-distance diagonal moves. Blocking is left to `Collides`.
pub struct MovesDiagonally;

impl Rule for MovesDiagonally {
    fn name(&self) -> &'static str {
        "Moves Diagonally"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        let Some(piece) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        if is_diagonal(piece.square, proposal.destination) {
            Vote::Allow(Priority::PATTERN_MATCH)
        } else {
            Vote::Abstain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArbiterConfig;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn votes_only_for_diagonals() {
        let board = Board::from_layout(
            "
            ..B.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        )
        .expect("layout should parse");
        let bishop = board.pieces().next().map(|p| p.id).expect("bishop");
        let config = ArbiterConfig::default();
        let ctx = RuleContext::speculative(&board, &config);
        let vote = |to: &str| {
            let to = algebraic_to_square(to).expect("square");
            MovesDiagonally.evaluate(&MoveProposal::speculative(bishop, to, 1), &ctx)
        };
        assert_eq!(vote("h6"), Vote::Allow(Priority::PATTERN_MATCH));
        assert_eq!(vote("a3"), Vote::Allow(Priority::PATTERN_MATCH));
        assert_eq!(vote("c4"), Vote::Abstain);
        assert_eq!(vote("d3"), Vote::Abstain);
        assert_eq!(vote("c1"), Vote::Abstain);
    }
}
