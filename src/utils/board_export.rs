//! Position export keyed by uppercase algebraic square.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::utils::algebraic::square_to_algebraic;

/// Every occupied square mapped to its piece notation, e.g. `"A2" -> 'P'`.
pub fn export_positions(board: &Board) -> BTreeMap<String, char> {
    board
        .pieces()
        .filter_map(|piece| {
            let square = square_to_algebraic(piece.square).ok()?;
            Some((square.to_uppercase(), piece.notation()))
        })
        .collect()
}

/// The export as one `SQUARE=notation` pair per entry, in square order.
pub fn format_positions(positions: &BTreeMap<String, char>) -> String {
    positions
        .iter()
        .map(|(square, notation)| format!("{square}={notation}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_positions_correctly() {
        let board = Board::standard().expect("standard layout");
        let output = export_positions(&board);
        assert_eq!(output.len(), 32);
        assert_eq!(output.get("A2"), Some(&'P'));
        assert_eq!(output.get("B2"), Some(&'P'));
        assert_eq!(output.get("A1"), Some(&'R'));
        assert_eq!(output.get("D8"), Some(&'q'));
        assert_eq!(output.get("E4"), None);
    }

    #[test]
    fn formats_positions_in_square_order() {
        let board = Board::from_layout(
            "
            R...K...
            ........
            ........
            ........
            ........
            ........
            ........
            ....k...
            ",
        )
        .expect("layout should parse");
        assert_eq!(format_positions(&export_positions(&board)), "A1=R E1=K E8=k");
    }
}
