//! Check and checkmate queries.
//!
//! Check detection asks the permission vote whether enemy pieces may move
//! onto the king's square, and move legality asks check detection whether a
//! move exposes the mover's king. The two recurse into each other, so every
//! query carries a depth:
//! - attack queries are issued at `depth + 1` and skip the self-check rule;
//! - checkmate escape and defence queries are issued at `depth + 1` and do
//!   run the self-check rule while it is below the cap;
//! - at or beyond `max_query_depth` a position is reported as not in check
//!   and the self-check rule abstains, which guarantees termination.
//!
//! Speculative moves are made on board copies and never touch the caller's
//! board.

use tracing::trace;

use crate::config::ArbiterConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceId, Team};
use crate::geometry::square::{squares_between, Square};
use crate::permission::arbiter::{decide_permission, RuleContext};
use crate::permission::proposal::MoveProposal;

/// Enemy pieces that could legally move onto `team`'s king square.
///
/// Whether the attacking move would expose the attacker's own king is
/// ignored.
pub fn attackers_of_king(board: &Board, team: Team, depth: u8, config: &ArbiterConfig) -> Vec<PieceId> {
    if depth >= config.max_query_depth {
        trace!(team = team.name(), depth, "check query at depth cap");
        return Vec::new();
    }
    let Some(king) = board.king_of(team) else {
        return Vec::new();
    };
    let target = king.square;
    let ctx = RuleContext::speculative(board, config);
    board
        .pieces_of(team.opposite())
        .filter(|enemy| {
            let proposal = MoveProposal::attack_query(enemy.id, target, depth + 1);
            decide_permission(&proposal, &ctx).is_permitted()
        })
        .map(|enemy| enemy.id)
        .collect()
}

/// True when any enemy piece attacks `team`'s king.
///
/// A team without a king is never in check.
pub fn is_in_check(board: &Board, team: Team, depth: u8, config: &ArbiterConfig) -> bool {
    if depth >= config.max_query_depth {
        trace!(team = team.name(), depth, "check query at depth cap");
        return false;
    }
    let Some(king) = board.king_of(team) else {
        return false;
    };
    let target = king.square;
    let ctx = RuleContext::speculative(board, config);
    board.pieces_of(team.opposite()).any(|enemy| {
        let proposal = MoveProposal::attack_query(enemy.id, target, depth + 1);
        decide_permission(&proposal, &ctx).is_permitted()
    })
}

/// True when moving `mover` to `destination` leaves its own king attacked.
///
/// The move is made on a copy of the board. Moves that cannot be performed
/// at all (unknown piece, off-board destination) report false.
pub fn movement_will_result_in_check(
    board: &Board,
    mover: PieceId,
    destination: Square,
    depth: u8,
    config: &ArbiterConfig,
) -> bool {
    let Some(team) = board.piece(mover).map(|p| p.team) else {
        return false;
    };
    match board.speculative_move(mover, destination) {
        Some(after) => is_in_check(&after, team, depth, config),
        None => false,
    }
}

/// True when the check on `king` by `attacker` cannot be escaped.
///
/// The king has no legal move to any other square, and no ally can legally
/// capture the attacker or interpose between it and the king. Ally moves are
/// only legal when they leave the king safe, so a double check is only
/// escapable by the king itself. A pawn that just advanced two squares can
/// also be captured on its en-passant marker.
///
/// Escape queries need a self-check test one level down, so when that level
/// reaches the depth cap the answer is false.
pub fn is_in_checkmate(
    board: &Board,
    king: PieceId,
    attacker: PieceId,
    depth: u8,
    config: &ArbiterConfig,
) -> bool {
    let (Some(king_piece), Some(attacker_piece)) = (board.piece(king), board.piece(attacker)) else {
        return false;
    };
    let next_depth = depth.saturating_add(1);
    if next_depth >= config.max_query_depth {
        trace!(king = ?king, depth, "checkmate query at depth cap");
        return false;
    }
    let ctx = RuleContext::speculative(board, config);

    let king_escapes = Square::all()
        .filter(|&square| square != king_piece.square)
        .any(|square| move_is_possible(king, square, next_depth, &ctx));
    if king_escapes {
        return false;
    }

    let mut defences: Vec<Square> = squares_between(king_piece.square, attacker_piece.square).collect();
    defences.push(attacker_piece.square);
    if let Some(marker) = board.en_passant().filter(|m| m.victim == attacker) {
        defences.push(marker.square);
    }

    let defended = board
        .pieces_of(king_piece.team)
        .filter(|ally| ally.id != king)
        .any(|ally| {
            defences
                .iter()
                .any(|&square| move_is_possible(ally.id, square, next_depth, &ctx))
        });
    !defended
}

/// Whether `mover` may move to `destination` as a speculative query.
#[inline]
pub(crate) fn move_is_possible(mover: PieceId, destination: Square, depth: u8, ctx: &RuleContext<'_>) -> bool {
    decide_permission(&MoveProposal::speculative(mover, destination, depth), ctx).is_permitted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::EnPassantMarker;
    use crate::game_state::chess_rules::STANDARD_LAYOUT;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn id_at(board: &Board, text: &str) -> PieceId {
        board.occupant_at(sq(text)).map(|p| p.id).expect("piece on square")
    }

    /// Flips the rows of a layout and swaps piece colours.
    fn mirror_layout(layout: &str) -> String {
        let cells: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        cells
            .chunks(8)
            .rev()
            .flat_map(|row| row.iter())
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect()
    }

    // White king h1 boxed in by its own rook and pawn, black queen on h8.
    const BACK_RANK_MATE: &str = "
        ......RK
        ......P.
        ........
        ........
        ........
        k.......
        ........
        .......q
    ";

    #[test]
    fn rook_on_open_file_gives_check() {
        let config = ArbiterConfig::default();
        let open = Board::from_layout(
            "
            ....K...
            ........
            ........
            ........
            ........
            ........
            ........
            ....r..k
            ",
        )
        .expect("layout should parse");
        assert!(is_in_check(&open, Team::White, 0, &config));
        assert!(!is_in_check(&open, Team::Black, 0, &config));
        assert_eq!(attackers_of_king(&open, Team::White, 0, &config), vec![id_at(&open, "e8")]);

        let blocked = Board::from_layout(
            "
            ....K...
            ....N...
            ........
            ........
            ........
            ........
            ........
            ....r..k
            ",
        )
        .expect("layout should parse");
        assert!(!is_in_check(&blocked, Team::White, 0, &config));
    }

    #[test]
    fn pinned_piece_still_gives_check() {
        // The black knight on e7 is pinned to its king by the e1 rook.
        let board = Board::from_layout(
            "
            ....R...
            ........
            ........
            ........
            .....K..
            ........
            ....n...
            ....k...
            ",
        )
        .expect("layout should parse");
        let config = ArbiterConfig::default();
        assert!(is_in_check(&board, Team::White, 0, &config));
        assert_eq!(attackers_of_king(&board, Team::White, 0, &config), vec![id_at(&board, "e7")]);
    }

    #[test]
    fn check_is_symmetric_under_mirroring() {
        let config = ArbiterConfig::default();
        for layout in [BACK_RANK_MATE, STANDARD_LAYOUT] {
            let board = Board::from_layout(layout).expect("layout should parse");
            let mirrored = Board::from_layout(&mirror_layout(layout)).expect("mirrored layout should parse");
            for team in [Team::White, Team::Black] {
                assert_eq!(
                    is_in_check(&board, team, 0, &config),
                    is_in_check(&mirrored, team.opposite(), 0, &config),
                );
            }
        }
    }

    #[test]
    fn moving_out_of_the_line_exposes_the_king() {
        let board = Board::from_layout(
            "
            ....K...
            ....B...
            ........
            ........
            ........
            ........
            ........
            ....r..k
            ",
        )
        .expect("layout should parse");
        let config = ArbiterConfig::default();
        let bishop = id_at(&board, "e2");
        assert!(movement_will_result_in_check(&board, bishop, sq("f3"), 0, &config));
        let king = id_at(&board, "e1");
        assert!(!movement_will_result_in_check(&board, king, sq("d1"), 0, &config));
        // The original board is unchanged.
        assert_eq!(board.occupant_at(sq("e2")).map(|p| p.id), Some(bishop));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let board = Board::from_layout(BACK_RANK_MATE).expect("layout should parse");
        let config = ArbiterConfig::default();
        let king = id_at(&board, "h1");
        let queen = id_at(&board, "h8");
        assert!(is_in_check(&board, Team::White, 0, &config));
        assert!(is_in_checkmate(&board, king, queen, 0, &config));
    }

    #[test]
    fn capturing_defender_lifts_checkmate() {
        let mut board = Board::from_layout(BACK_RANK_MATE).expect("layout should parse");
        board
            .publish(Piece::standard(Team::White, PieceKind::Rook), sq("b8"))
            .expect("b8 is empty");
        let config = ArbiterConfig::default();
        let king = id_at(&board, "h1");
        let queen = id_at(&board, "h8");
        assert!(is_in_check(&board, Team::White, 0, &config));
        assert!(!is_in_checkmate(&board, king, queen, 0, &config));
    }

    #[test]
    fn interposing_defender_lifts_checkmate() {
        // A white bishop on e4 can block on h7.
        let mut board = Board::from_layout(BACK_RANK_MATE).expect("layout should parse");
        board
            .publish(Piece::standard(Team::White, PieceKind::Bishop), sq("e4"))
            .expect("e4 is empty");
        let config = ArbiterConfig::default();
        let king = id_at(&board, "h1");
        let queen = id_at(&board, "h8");
        assert!(!is_in_checkmate(&board, king, queen, 0, &config));
    }

    #[test]
    fn depth_cap_reports_no_check() {
        let board = Board::from_layout(BACK_RANK_MATE).expect("layout should parse");
        let config = ArbiterConfig::default();
        assert!(is_in_check(&board, Team::White, 0, &config));
        assert!(!is_in_check(&board, Team::White, config.max_query_depth, &config));
        assert!(!is_in_check(&board, Team::White, u8::MAX, &config));
    }

    #[test]
    fn depth_cap_reports_no_checkmate() {
        let board = Board::from_layout(BACK_RANK_MATE).expect("layout should parse");
        let king = id_at(&board, "h1");
        let queen = id_at(&board, "h8");
        let config = ArbiterConfig::default();
        assert!(is_in_checkmate(&board, king, queen, 0, &config));
        assert!(!is_in_checkmate(&board, king, queen, config.max_query_depth - 1, &config));
        assert!(!is_in_checkmate(&board, king, queen, config.max_query_depth, &config));
        assert!(!is_in_checkmate(&board, king, queen, u8::MAX, &config));

        let deeper = ArbiterConfig { max_query_depth: 3 };
        assert!(is_in_checkmate(&board, king, queen, 1, &deeper));
    }

    // White king a4 checked by the b5 pawn, which just advanced from b7.
    // Every king square is covered; only a5xb6 en passant removes the checker.
    const EN_PASSANT_DEFENCE: &str = "
        ........
        ........
        .......r
        K.......
        Pp......
        ..pb....
        ........
        .......k
    ";

    #[test]
    fn en_passant_capture_of_checking_pawn_lifts_checkmate() {
        let mut board = Board::from_layout(EN_PASSANT_DEFENCE).expect("layout should parse");
        let checker = id_at(&board, "b5");
        board.set_en_passant(Some(EnPassantMarker {
            square: sq("b6"),
            victim: checker,
            team: Team::Black,
        }));
        let config = ArbiterConfig::default();
        let king = id_at(&board, "a4");
        assert_eq!(attackers_of_king(&board, Team::White, 0, &config), vec![checker]);
        assert!(!is_in_checkmate(&board, king, checker, 0, &config));

        board.set_en_passant(None);
        assert!(is_in_checkmate(&board, king, checker, 0, &config));
    }

    // White king h1 checked by the a1 rook and the f2 knight at once.
    // The d2 queen can take either checker, but never both.
    const DOUBLE_CHECK: &str = "
        r......K
        ...Q.nPP
        ........
        ........
        ........
        ........
        ........
        k.......
    ";

    #[test]
    fn double_check_is_mate_when_the_king_cannot_move() {
        let board = Board::from_layout(DOUBLE_CHECK).expect("layout should parse");
        let config = ArbiterConfig::default();
        let king = id_at(&board, "h1");
        let rook = id_at(&board, "a1");
        let knight = id_at(&board, "f2");
        let queen = id_at(&board, "d2");

        let mut attackers = attackers_of_king(&board, Team::White, 0, &config);
        attackers.sort();
        let mut expected = vec![rook, knight];
        expected.sort();
        assert_eq!(attackers, expected);

        let ctx = RuleContext::speculative(&board, &config);
        assert!(move_is_possible(queen, sq("f2"), 3, &ctx));
        assert!(!move_is_possible(queen, sq("f2"), 1, &ctx));
        assert!(!move_is_possible(queen, sq("d1"), 1, &ctx));
        assert!(is_in_checkmate(&board, king, rook, 0, &config));
        assert!(is_in_checkmate(&board, king, knight, 0, &config));
    }
}
