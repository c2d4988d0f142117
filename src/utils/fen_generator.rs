//! FEN export of a game state.
//!
//! Used to hand the current position to an external move-suggestion engine.
//! Castling is not tracked, so the castling field is always `-`.

use crate::game_state::chess_types::Team;
use crate::game_state::game_state::GameState;
use crate::geometry::square::Square;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.turn {
        Team::White => "w",
        Team::Black => "b",
    };
    let en_passant = game_state
        .en_passant_square()
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} - {} {} {}",
        board, side_to_move, en_passant, game_state.half_move_clock, game_state.full_move_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            if let Some(piece) = game_state.board.occupant_at(Square::new(file, rank)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.notation());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}
