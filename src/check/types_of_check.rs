use crate::check::check_queries::{attackers_of_king, is_in_checkmate};
use crate::config::ArbiterConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceId, Team};

/// Descriptions of check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckState {
    /// King piece and every piece attacking it
    Check { king: PieceId, attackers: Vec<PieceId> },
    /// King piece and the attacker it cannot escape
    Checkmate { king: PieceId, attacker: PieceId },
}

impl CheckState {
    pub fn king(&self) -> PieceId {
        match self {
            CheckState::Check { king, .. } | CheckState::Checkmate { king, .. } => *king,
        }
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        matches!(self, CheckState::Checkmate { .. })
    }
}

/// Classifies the check on `team`'s king, `None` when it is not attacked.
pub fn inspect_check(board: &Board, team: Team, config: &ArbiterConfig) -> Option<CheckState> {
    let king = board.king_of(team)?.id;
    let attackers = attackers_of_king(board, team, 0, config);
    if attackers.is_empty() {
        return None;
    }
    let mated = attackers
        .iter()
        .all(|&attacker| is_in_checkmate(board, king, attacker, 0, config));
    if mated {
        Some(CheckState::Checkmate {
            king,
            attacker: attackers[0],
        })
    } else {
        Some(CheckState::Check { king, attackers })
    }
}
