use std::str::FromStr;

use crate::game::{Color, GameState, Tile};

/// Decision interface shared by all players of a match.
pub trait Agent {
    /// Choose a tile to claim. Must only be called on a non-terminal state
    /// and must return a move that is currently legal.
    fn select_move(&mut self, state: &GameState) -> Tile;

    /// Display name for match reporting.
    fn name(&self) -> &str;
}

/// Tagged selector over the built-in strategies; this is the configuration
/// and CLI surface for choosing who plays each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Uniform choice over the legal moves.
    Random,
    /// Exhaustive negamax search; provably optimal.
    Smart,
}

impl StrategyKind {
    pub fn build(self, color: Color) -> Box<dyn Agent> {
        match self {
            StrategyKind::Random => Box::new(super::RandomAgent::new()),
            StrategyKind::Smart => Box::new(super::SmartAgent::new(color)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown strategy '{0}' (expected 'random' or 'smart')")]
pub struct ParseStrategyError(String);

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(StrategyKind::Random),
            "smart" => Ok(StrategyKind::Smart),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
