//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, SuggestedMove};
use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible engine for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Chess Arbiter Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ArbiterResult<()> {
        match name {
            "seed" => {
                let seed = value.trim().parse::<u64>().map_err(|_| ArbiterError::InvalidOption {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
                self.rng = StdRng::seed_from_u64(seed);
                Ok(())
            }
            _ => Err(ArbiterError::InvalidOption {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    fn choose_move(&mut self, game_state: &GameState) -> ArbiterResult<Option<SuggestedMove>> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state);
        debug!(legal_moves = legal_moves.len(), "random engine choosing");

        Ok(legal_moves.as_slice().choose(&mut self.rng).map(|picked| SuggestedMove {
            from: picked.from,
            to: picked.to,
        }))
    }
}
