//! Crate root module declarations for the chess arbiter.
//!
//! This file exposes all top-level subsystems (geometry, board and game
//! state, the movement permission vote, rule components, check queries, move
//! listing, engines and utility helpers) so binaries, tests, and benches can
//! import stable module paths.

pub mod config;
pub mod errors;

pub mod geometry {
    pub mod square;
}

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod permission {
    pub mod arbiter;
    pub mod proposal;
    pub mod verdict;
}

pub mod rules {
    pub mod can_only_move_on_turn;
    pub mod cannot_expose_king;
    pub mod cannot_land_on_team;
    pub mod collides;
    pub mod knight_movement;
    pub mod moves_diagonally;
    pub mod moves_one_square_any_direction;
    pub mod moves_orthogonally;
    pub mod pawn_movement;
    pub mod queens;
    pub mod rule_component;
}

pub mod check {
    pub mod check_queries;
    pub mod types_of_check;
}

pub mod move_generation {
    pub mod legal_move_generator;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_export;
    pub mod fen_generator;
    pub mod game_record;
    pub mod layout_parser;
    pub mod render_game_state;
}
