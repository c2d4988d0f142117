//! Runs the permission vote for one proposal.

use tracing::{debug, trace};

use crate::config::ArbiterConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Team;
use crate::permission::proposal::MoveProposal;
use crate::permission::verdict::{Ballot, Priority, Verdict};
use crate::rules::rule_component::Rule;

/// Reason reported for a destination outside the board.
pub const OFF_BOARD_REASON: &str = "Destination is off the board.";

/// Everything a rule component may look at besides the proposal.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub board: &'a Board,
    /// Team holding the turn token, `None` before the game starts.
    pub current_turn: Option<Team>,
    pub config: &'a ArbiterConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(board: &'a Board, current_turn: Option<Team>, config: &'a ArbiterConfig) -> Self {
        Self {
            board,
            current_turn,
            config,
        }
    }

    /// Context for speculative queries, which ignore the turn token.
    pub fn speculative(board: &'a Board, config: &'a ArbiterConfig) -> Self {
        Self::new(board, None, config)
    }
}

/// Invokes each rule attached to the mover once, in attachment order.
///
/// A mover that is not on the board contributes no votes.
pub fn collect_votes(proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Ballot {
    let mut ballot = Ballot::new();
    let Some(mover) = ctx.board.piece(proposal.mover) else {
        debug!(mover = ?proposal.mover, "proposal for a piece that is not on the board");
        return ballot;
    };
    for rule in &mover.rules {
        ballot.cast(rule.evaluate(proposal, ctx));
    }
    ballot
}

/// Decides whether the proposed move is permitted.
pub fn decide_permission(proposal: &MoveProposal, ctx: &RuleContext<'_>) -> Verdict {
    let verdict = if proposal.destination.is_in_bounds() {
        collect_votes(proposal, ctx).decide()
    } else {
        Verdict::Denied {
            priority: Priority::DISALLOWED,
            reason: OFF_BOARD_REASON,
        }
    };
    trace!(
        mover = ?proposal.mover,
        to = %proposal.destination,
        depth = proposal.query_depth,
        ?verdict,
        "permission decided"
    );
    verdict
}
