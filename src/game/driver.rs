use crate::ai::Agent;

use super::player::Color;
use super::state::{GameState, Outcome};

/// One match: a single [`GameState`] and the two agents playing it. Red
/// always moves first; whose turn it is falls out of move-count parity.
pub struct Game {
    state: GameState,
    red: Box<dyn Agent>,
    black: Box<dyn Agent>,
}

impl Game {
    pub fn new(state: GameState, red: Box<dyn Agent>, black: Box<dyn Agent>) -> Game {
        Game { state, red, black }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays one turn: snapshot the state, ask the current agent, apply its
    /// choice to the real state. An illegal choice is reported and the same
    /// agent is re-prompted on the next call instead of forfeiting the
    /// turn. Returns `false` once the match is over.
    pub fn step(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        let snapshot = self.state.clone();
        let agent = match self.state.current_color() {
            Color::Red => &mut self.red,
            Color::Black => &mut self.black,
        };
        let tile = agent.select_move(&snapshot);
        if let Err(err) = self.state.apply(tile) {
            eprintln!(
                "Warning: {} submitted an illegal move ({err}), re-prompting",
                agent.name()
            );
            return true;
        }
        !self.state.is_over()
    }

    /// Runs the match to completion and returns its result.
    pub fn run(&mut self) -> Outcome {
        while self.step() {}
        self.state
            .outcome()
            .expect("finished match has an outcome")
    }
}
