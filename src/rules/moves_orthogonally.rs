use crate::geometry::square::is_orthogonal;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::{Priority, Vote};
use crate::rules::rule_component::{mover, Rule};

/// Allows any-distance moves along a rank or file.
pub struct MovesOrthogonally;

impl Rule for MovesOrthogonally {
    fn name(&self) -> &'static str {
        "Moves Orthogonally"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        match mover(proposal, ctx) {
            Some(piece) if is_orthogonal(piece.square, proposal.destination) => {
                Vote::Allow(Priority::PATTERN_MATCH)
            }
            _ => Vote::Abstain,
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
    fn votes_only_along_ranks_and_files() {
        let mut layout = String::from("R");
        layout.push_str(&".".repeat(63));
        let board = Board::from_layout(&layout).expect("layout should parse");
        let rook = board.pieces().next().map(|p| p.id).expect("rook");
        let config = ArbiterConfig::default();
        let ctx = RuleContext::speculative(&board, &config);
        let vote = |to: &str| {
            let to = algebraic_to_square(to).expect("square");
            MovesOrthogonally.evaluate(&MoveProposal::speculative(rook, to, 1), &ctx)
        };
        assert_eq!(vote("a8"), Vote::Allow(Priority::PATTERN_MATCH));
        assert_eq!(vote("h1"), Vote::Allow(Priority::PATTERN_MATCH));
        assert_eq!(vote("b2"), Vote::Abstain);
        assert_eq!(vote("a1"), Vote::Abstain);
    }
}
