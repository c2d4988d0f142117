use std::io::{self, BufRead, Write};

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use chess_arbiter::config::ArbiterConfig;
use chess_arbiter::engines::engine_random::RandomEngine;
use chess_arbiter::engines::engine_trait::Engine;
use chess_arbiter::errors::{ArbiterError, ArbiterResult};
use chess_arbiter::game_state::game_state::{GameState, MoveOutcome};
use chess_arbiter::geometry::square::Square;
use chess_arbiter::utils::algebraic::algebraic_to_square;
use chess_arbiter::utils::board_export::{export_positions, format_positions};
use chess_arbiter::utils::fen_generator::generate_fen;
use chess_arbiter::utils::game_record::{game_result, move_record_to_text, write_game_record};
use chess_arbiter::utils::render_game_state::render_game_state;

const HELP: &str = "commands: <from><to> (e.g. e2e4), board, fen, positions, moves, ai, pgn, new, help, quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = ArbiterConfig::from_env();
    let mut game = match GameState::new_game() {
        Ok(game) => game.with_config(config),
        Err(e) => {
            error!("failed to set up the standard game: {e}");
            return;
        }
    };
    let mut engine = RandomEngine::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{HELP}");
    println!("{}", render_game_state(&game));

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => println!("{}", render_game_state(&game)),
            "fen" => println!("{}", generate_fen(&game)),
            "positions" => println!("{}", format_positions(&export_positions(&game.board))),
            "pgn" => print!("{}", write_game_record(&game)),
            "new" => {
                game = match GameState::new_game() {
                    Ok(fresh) => fresh.with_config(config),
                    Err(e) => {
                        error!("failed to set up the standard game: {e}");
                        break;
                    }
                };
                engine.new_game();
                println!("{}", render_game_state(&game));
            }
            "moves" => {
                let moves: Vec<String> = game
                    .legal_moves()
                    .iter()
                    .map(|m| format!("{}{}", m.from, m.to))
                    .collect();
                println!("{}", moves.join(" "));
            }
            "ai" => match engine.choose_move(&game) {
                Ok(Some(suggestion)) => report(&mut game, suggestion.from, suggestion.to),
                Ok(None) => println!("no legal move for {}", game.turn.name()),
                Err(e) => warn!("engine failed: {e}"),
            },
            text => match parse_move(text) {
                Ok((from, to)) => report(&mut game, from, to),
                Err(e) => println!("{e}"),
            },
        }
        stdout.flush().ok();
    }
}

fn parse_move(text: &str) -> ArbiterResult<(Square, Square)> {
    let text = text.trim();
    let (Some(from), Some(to)) = (text.get(..2), text.get(2..)) else {
        return Err(ArbiterError::InvalidAlgebraic {
            text: text.to_owned(),
        });
    };
    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?))
}

fn report(game: &mut GameState, from: Square, to: Square) {
    match game.move_piece(from, to) {
        Ok(MoveOutcome::Applied(record)) => {
            println!("{}", move_record_to_text(&record));
            println!("{}", render_game_state(game));
            if game.is_checkmate() {
                println!("checkmate {}", game_result(game));
            }
        }
        Ok(MoveOutcome::Denied { reason }) => println!("denied: {reason}"),
        Err(e) => println!("{e}"),
    }
}
