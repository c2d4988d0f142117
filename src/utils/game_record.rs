//! PGN-style record of a played game.
//!
//! Moves are written in long algebraic form with the moving piece letter,
//! e.g. `Ng1-f3`, `e4xd5`, `d7-d8=Q`, followed by `+` or `#`.

use std::collections::BTreeMap;

use chrono::Local;

use crate::check::types_of_check::CheckState;
use crate::game_state::chess_types::{PieceKind, Team};
use crate::game_state::game_state::{GameState, MoveRecord};

/// Long algebraic text for one history entry.
pub fn move_record_to_text(record: &MoveRecord) -> String {
    let mut out = String::new();
    if record.kind != PieceKind::Pawn {
        out.push(record.kind.letter().to_ascii_uppercase());
    }
    out.push_str(&record.from.to_string());
    out.push(if record.captured.is_some() { 'x' } else { '-' });
    out.push_str(&record.to.to_string());
    if record.promoted_to.is_some() {
        out.push_str("=Q");
    }
    match record.check {
        Some(CheckState::Checkmate { .. }) => out.push('#'),
        Some(CheckState::Check { .. }) => out.push('+'),
        None => {}
    }
    out
}

/// Result tag for the game so far.
pub fn game_result(game_state: &GameState) -> &'static str {
    if !game_state.is_checkmate() {
        return "*";
    }
    match game_state.turn {
        Team::White => "0-1",
        Team::Black => "1-0",
    }
}

/// Writes the game with the default header set, dated today.
pub fn write_game_record(game_state: &GameState) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Chess Arbiter Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), game_result(game_state).to_owned());
    write_game_record_with_headers(game_state, &headers)
}

pub fn write_game_record_with_headers(game_state: &GameState, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(game_state.history.len() + 1);
    let mut move_number = 1u32;
    for (ply, record) in game_state.history.iter().enumerate() {
        let text = move_record_to_text(record);
        match record.team {
            Team::White => movetext_parts.push(format!("{move_number}. {text}")),
            Team::Black if ply == 0 => movetext_parts.push(format!("{move_number}... {text}")),
            Team::Black => movetext_parts.push(text),
        }
        if record.team == Team::Black {
            move_number += 1;
        }
    }

    let result = headers.get("Result").map(String::as_str).unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
