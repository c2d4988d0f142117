//! Engine abstraction for move suggestion.
//!
//! Engines look at a [`GameState`] and suggest a move for the side to move.
//! The arbiter still votes on whatever they suggest.

use crate::errors::ArbiterResult;
use crate::game_state::game_state::GameState;
use crate::geometry::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedMove {
    pub from: Square,
    pub to: Square,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ArbiterResult<()> {
        Ok(())
    }

    /// A move for the side to move, `None` when it has no legal move.
    fn choose_move(&mut self, game_state: &GameState) -> ArbiterResult<Option<SuggestedMove>>;
}
