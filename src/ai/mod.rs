//! Decision strategies for Niya players.

mod agent;
mod negamax;
mod random;

pub use agent::{Agent, ParseStrategyError, StrategyKind};
pub use negamax::SmartAgent;
pub use random::RandomAgent;
