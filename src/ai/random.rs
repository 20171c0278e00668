use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{GameState, Tile};

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible matches and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Tile {
        let moves: Vec<Tile> = state.legal_moves().collect();
        assert!(!moves.is_empty(), "no legal moves available");
        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
