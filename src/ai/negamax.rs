use crate::game::{Color, GameState, Tile};

use super::agent::Agent;

/// Scores are in moves-to-win units and never exceed 17 in magnitude, so
/// these bounds behave as infinities.
const SCORE_MIN: i32 = -100;
const SCORE_MAX: i32 = 100;

/// Agent that plays provably optimal moves: negamax over the full game
/// tree with alpha-beta pruning, no depth cutoff and no heuristic.
pub struct SmartAgent {
    color: Color,
}

impl SmartAgent {
    pub fn new(color: Color) -> Self {
        SmartAgent { color }
    }

    /// Value of a finished match relative to this agent's color: zero for a
    /// draw, otherwise `17 - moves_made` signed towards the winner, which
    /// rewards faster wins and slower losses.
    fn terminal_value(&self, state: &GameState) -> i32 {
        let magnitude = 17 - i32::from(state.moves_made());
        match state.winner() {
            None => 0,
            Some(winner) if winner == self.color => magnitude,
            Some(_) => -magnitude,
        }
    }

    /// Negamax value of `state`, exact to the terminal frontier. `sign` is
    /// +1 on this agent's plies and -1 on the opponent's.
    fn negamax(&self, state: &GameState, mut alpha: i32, beta: i32, sign: i32) -> i32 {
        if state.is_over() {
            return sign * self.terminal_value(state);
        }
        let mut best = SCORE_MIN;
        for tile in state.legal_moves() {
            let child = state
                .with_move(tile)
                .expect("legal-move generator yields playable tiles");
            let value = -self.negamax(&child, -beta, -alpha, -sign);
            if value > best {
                best = value;
                if best > alpha {
                    alpha = best;
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }
        best
    }
}

impl Agent for SmartAgent {
    fn select_move(&mut self, state: &GameState) -> Tile {
        let mut alpha = SCORE_MIN;
        let beta = SCORE_MAX;
        let mut best: Option<Tile> = None;
        let mut best_value = i32::MIN;
        for tile in state.legal_moves() {
            let child = state
                .with_move(tile)
                .expect("legal-move generator yields playable tiles");
            // Each child is scored from the opponent's perspective.
            let value = -self.negamax(&child, -beta, -alpha, -1);
            if value > best_value {
                best_value = value;
                best = Some(tile);
                alpha = best_value;
                // Alpha never reaches beta at the top level, so no cut here.
            }
        }
        best.expect("select_move called on a state with no legal moves")
    }

    fn name(&self) -> &str {
        "Smart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{pack_seed, Board, Outcome};

    fn state_from(layout: [u8; 16]) -> GameState {
        GameState::new(Board::from_seed(pack_seed(&layout)).unwrap())
    }

    /// Plays a scripted (row, col) prefix onto a fresh state.
    fn play_prefix(state: &mut GameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            let tile = state.board().tile_at(row * 4 + col);
            state.apply(tile).unwrap();
        }
    }

    #[test]
    fn test_selects_legal_move() {
        let mut state = state_from([7, 1, 15, 5, 13, 2, 9, 12, 0, 4, 8, 10, 11, 14, 3, 6]);
        play_prefix(&mut state, &[(0, 1), (1, 1), (2, 0), (1, 3)]);
        let legal: Vec<Tile> = state.legal_moves().collect();

        let mut agent = SmartAgent::new(state.current_color());
        let tile = agent.select_move(&state);
        assert!(legal.contains(&tile), "tile {tile} is not legal");
    }

    #[test]
    fn test_takes_immediate_win() {
        // Red holds three cells of the top row; claiming the fourth wins
        // now, and no other move can match that score.
        let mut state = state_from([0, 5, 12, 6, 8, 4, 13, 3, 15, 11, 1, 7, 10, 9, 14, 2]);
        play_prefix(
            &mut state,
            &[(0, 0), (3, 3), (0, 3), (3, 2), (0, 2), (1, 2)],
        );
        assert_eq!(state.current_color(), Color::Red);

        let mut agent = SmartAgent::new(Color::Red);
        let tile = agent.select_move(&state);
        state.apply(tile).unwrap();
        assert_eq!(state.winner(), Some(Color::Red));
        assert_eq!(state.moves_made(), 7);
    }

    #[test]
    fn test_full_game_against_random_completes() {
        let mut state = state_from([5, 11, 15, 7, 9, 12, 10, 14, 8, 3, 13, 6, 0, 2, 4, 1]);
        let mut red = RandomAgent::with_seed(21);
        let mut black = SmartAgent::new(Color::Black);

        while !state.is_over() {
            let tile = if state.moves_made() % 2 == 0 {
                red.select_move(&state)
            } else {
                black.select_move(&state)
            };
            state.apply(tile).unwrap();
        }

        assert!(state.is_over());
        match state.outcome().unwrap() {
            Outcome::Winner(_) => assert!(state.winner().is_some()),
            Outcome::Draw => assert_eq!(state.moves_made(), 16),
        }
    }

    #[test]
    fn test_name_is_smart() {
        let agent = SmartAgent::new(Color::Red);
        assert_eq!(agent.name(), "Smart");
    }
}
