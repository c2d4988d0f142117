//! Move proposals submitted to the permission vote.

use crate::game_state::chess_types::PieceId;
use crate::geometry::square::Square;

/// Bit flags describing where a proposal came from.
pub type ProposalTags = u8;

/// A move a player asked for. Only these are subject to the turn gate.
pub const TAG_PLAYER_MOVEMENT: ProposalTags = 1 << 0;
/// A decision-only query; the move is never committed.
pub const TAG_SPECULATIVE: ProposalTags = 1 << 1;
/// A query asking whether the mover attacks the destination.
pub const TAG_ATTACK_QUERY: ProposalTags = 1 << 2;

/// A proposed move of one piece to one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveProposal {
    pub mover: PieceId,
    pub destination: Square,
    pub tags: ProposalTags,
    /// Nesting level of speculative evaluation; 0 for a real move.
    pub query_depth: u8,
}

impl MoveProposal {
    pub fn new(mover: PieceId, destination: Square, tags: ProposalTags, query_depth: u8) -> Self {
        Self {
            mover,
            destination,
            tags,
            query_depth,
        }
    }

    /// A move requested by a player, evaluated at depth 0.
    pub fn player(mover: PieceId, destination: Square) -> Self {
        Self::new(mover, destination, TAG_PLAYER_MOVEMENT, 0)
    }

    /// A legality question asked on behalf of another evaluation.
    pub fn speculative(mover: PieceId, destination: Square, query_depth: u8) -> Self {
        Self::new(mover, destination, TAG_SPECULATIVE, query_depth)
    }

    /// An attack question asked by check detection.
    pub fn attack_query(mover: PieceId, destination: Square, query_depth: u8) -> Self {
        Self::new(mover, destination, TAG_SPECULATIVE | TAG_ATTACK_QUERY, query_depth)
    }

    #[inline]
    pub fn tagged(&self, tag: ProposalTags) -> bool {
        self.tags & tag != 0
    }
}
