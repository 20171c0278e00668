//! Core Niya rules: the fixed tile layout, the claim state machine with its
//! packed win-pattern counters, and the match driver.

mod board;
mod cover;
mod driver;
mod player;
mod state;

pub use board::{is_border, pack_seed, random_seed, Board, Tile, TILE_COUNT};
pub use cover::{Cover, PATTERN_COUNT};
pub use driver::Game;
pub use player::Color;
pub use state::{GameState, LegalMoves, MoveError, Outcome};
