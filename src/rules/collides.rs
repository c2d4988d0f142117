use crate::geometry::square::squares_between;
use crate::permission::arbiter::RuleContext;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::Vote;
use crate::rules::rule_component::{mover, Rule};

pub const PIECE_IN_THE_WAY: &str = "Another piece is in the way!";

/// Disallows movement if a piece is BETWEEN the mover and its destination.
///
/// The destination itself is never checked, so captures are unaffected.
pub struct Collides;

impl Rule for Collides {
    fn name(&self) -> &'static str {
        "Collides"
    }

    fn evaluate(&self, proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Vote {
        let Some(piece) = mover(proposal, ctx) else {
            return Vote::Abstain;
        };
        let blocked = squares_between(piece.square, proposal.destination)
            .any(|square| ctx.board.is_occupied(square));
        if blocked {
            Vote::deny(PIECE_IN_THE_WAY)
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
    use crate::game_state::chess_types::{PieceId, Team};
    use crate::geometry::square::Square;
    use crate::permission::arbiter::decide_permission;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn id_at(board: &Board, text: &str) -> PieceId {
        board.occupant_at(sq(text)).map(|p| p.id).expect("piece on square")
    }

    // Mover on b3, friendly c3, enemies d3, a3, e6 and b8.
    const LAYOUT: &str = "
        ........
        ........
        pQRp....
        ........
        ........
        ....p...
        ........
        .p......
    ";

    fn vote(board: &Board, to: &str) -> Vote {
        let config = ArbiterConfig::default();
        let ctx = RuleContext::speculative(board, &config);
        Collides.evaluate(&MoveProposal::speculative(id_at(board, "b3"), sq(to), 1), &ctx)
    }

    #[test]
    fn open_space_is_not_denied() {
        let board = Board::from_layout(LAYOUT).expect("layout should parse");
        assert_eq!(vote(&board, "b7"), Vote::Abstain);
        assert_eq!(vote(&board, "b1"), Vote::Abstain);
        assert_eq!(vote(&board, "a4"), Vote::Abstain);
    }

    #[test]
    fn landing_on_a_piece_at_the_end_is_not_denied() {
        let board = Board::from_layout(LAYOUT).expect("layout should parse");
        assert_eq!(vote(&board, "c3"), Vote::Abstain);
        assert_eq!(vote(&board, "a3"), Vote::Abstain);
        assert_eq!(vote(&board, "b8"), Vote::Abstain);
    }

    #[test]
    fn passing_through_pieces_is_denied() {
        let board = Board::from_layout(LAYOUT).expect("layout should parse");
        assert_eq!(vote(&board, "d3"), Vote::deny(PIECE_IN_THE_WAY));
        assert_eq!(vote(&board, "e3"), Vote::deny(PIECE_IN_THE_WAY));
        assert_eq!(vote(&board, "f7"), Vote::deny(PIECE_IN_THE_WAY));
    }

    #[test]
    fn rook_file_move_depends_on_blocker() {
        let mut board = Board::from_layout(
            "
            R...K...
            ........
            ........
            p.......
            ........
            ........
            ........
            ....k...
            ",
        )
        .expect("layout should parse");
        let config = ArbiterConfig::default();
        let rook = id_at(&board, "a1");
        {
            let ctx = RuleContext::new(&board, Some(Team::White), &config);
            assert!(!decide_permission(&MoveProposal::player(rook, sq("a8")), &ctx).is_permitted());
            assert!(decide_permission(&MoveProposal::player(rook, sq("a4")), &ctx).is_permitted());
        }
        let blocker = id_at(&board, "a4");
        board.unpublish(blocker).expect("blocker is published");
        let ctx = RuleContext::new(&board, Some(Team::White), &config);
        assert!(decide_permission(&MoveProposal::player(rook, sq("a8")), &ctx).is_permitted());
    }
}
