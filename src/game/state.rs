use std::fmt;

use super::board::{is_border, Board, Tile, TILE_COUNT};
use super::cover::Cover;
use super::player::Color;

/// Terminal result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// Why a move was rejected. Rejections never change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the match is already over")]
    GameOver,
    #[error("first move must be on the border ring")]
    NotOnBorder,
    #[error("tile is already claimed")]
    Occupied,
    #[error("tile shares neither plant nor poem with the previous move")]
    SymbolMismatch,
}

/// Full state of one Niya match: the fixed tile layout, per-cell claims,
/// the previous move, and one packed pattern [`Cover`] per color.
///
/// The only mutation after construction is [`GameState::apply`]; `Clone`
/// yields a deep, independent copy, which is how the search engine branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    owner: [Option<Color>; TILE_COUNT],
    moves_made: u8,
    last: Option<Tile>,
    winner: Option<Color>,
    red_cover: Cover,
    black_cover: Cover,
}

impl GameState {
    /// Fresh, unplayed state over `board`.
    pub fn new(board: Board) -> GameState {
        GameState {
            board,
            owner: [None; TILE_COUNT],
            moves_made: 0,
            last: None,
            winner: None,
            red_cover: Cover::default(),
            black_cover: Cover::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves_made(&self) -> u8 {
        self.moves_made
    }

    /// The most recently claimed tile; `None` only before the first move.
    pub fn last_move(&self) -> Option<Tile> {
        self.last
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// The color that moves this turn, derived from move-count parity.
    pub fn current_color(&self) -> Color {
        if self.moves_made & 1 == 0 {
            Color::Red
        } else {
            Color::Black
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.moves_made as usize == TILE_COUNT
    }

    /// Terminal result, or `None` while the match is still running. A full
    /// board with no completed pattern is a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(color) => Some(Outcome::Winner(color)),
            None if self.moves_made as usize == TILE_COUNT => Some(Outcome::Draw),
            None => None,
        }
    }

    /// The claim at board position `pos`.
    pub fn owner_at(&self, pos: usize) -> Option<Color> {
        self.owner[pos]
    }

    /// One color's pattern counters.
    pub fn cover(&self, color: Color) -> Cover {
        match color {
            Color::Red => self.red_cover,
            Color::Black => self.black_cover,
        }
    }

    fn is_open(&self, tile: Tile) -> bool {
        self.owner[self.board.position_of(tile)].is_none()
    }

    /// Resolves `tile` to its board position if it is playable this turn.
    fn validate(&self, tile: Tile) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = self.board.position_of(tile);
        match self.last {
            None => {
                if is_border(pos) {
                    Ok(pos)
                } else {
                    Err(MoveError::NotOnBorder)
                }
            }
            Some(previous) => {
                if self.owner[pos].is_some() {
                    Err(MoveError::Occupied)
                } else if !tile.matches(previous) {
                    Err(MoveError::SymbolMismatch)
                } else {
                    Ok(pos)
                }
            }
        }
    }

    /// Plays `tile` for the current color. On rejection the state is left
    /// untouched and the same color stays to move.
    pub fn apply(&mut self, tile: Tile) -> Result<(), MoveError> {
        let pos = self.validate(tile)?;
        let mover = self.current_color();
        self.owner[pos] = Some(mover);
        let cover = match mover {
            Color::Red => {
                self.red_cover.add(pos);
                self.red_cover
            }
            Color::Black => {
                self.black_cover.add(pos);
                self.black_cover
            }
        };
        // A pattern win can only complete the mover's own cover.
        if cover.any_complete() {
            self.winner = Some(mover);
        }
        self.moves_made += 1;
        self.last = Some(tile);
        self.check_lockout(mover);
        Ok(())
    }

    /// Clone-and-play transition used by the search engine.
    pub fn with_move(&self, tile: Tile) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply(tile)?;
        Ok(next)
    }

    /// Awards the match to `mover` when unclaimed tiles remain but none of
    /// them can legally follow the move just played.
    fn check_lockout(&mut self, mover: Color) {
        if self.is_over() {
            return;
        }
        let Some(previous) = self.last else { return };
        for i in 0..4 {
            if self.is_open(Tile::from_symbols(previous.plant(), i))
                || self.is_open(Tile::from_symbols(i, previous.poem()))
            {
                return;
            }
        }
        self.winner = Some(mover);
    }

    /// Lazily enumerates the tiles playable this turn: the 12 border tiles
    /// in board-position order on the first move, afterwards the unclaimed
    /// tiles sharing the previous plant followed by those sharing the
    /// previous poem. Empty once the match is over.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        LegalMoves {
            state: self,
            step: 0,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            for col in 0..4 {
                let glyph = match self.owner[row * 4 + col] {
                    Some(Color::Red) => 'R',
                    Some(Color::Black) => 'B',
                    None => '_',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the current turn's legal tiles. See
/// [`GameState::legal_moves`] for the enumeration order.
pub struct LegalMoves<'a> {
    state: &'a GameState,
    step: usize,
}

impl Iterator for LegalMoves<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        let state = self.state;
        if state.is_over() {
            return None;
        }
        match state.last {
            None => {
                while self.step < TILE_COUNT {
                    let pos = self.step;
                    self.step += 1;
                    if is_border(pos) {
                        return Some(state.board.tile_at(pos));
                    }
                }
                None
            }
            Some(previous) => {
                // Steps 0..4 walk the plant group, 4..8 the poem group; the
                // previous tile itself sits in both but is always claimed.
                while self.step < 8 {
                    let i = (self.step & 3) as u8;
                    let tile = if self.step < 4 {
                        Tile::from_symbols(previous.plant(), i)
                    } else {
                        Tile::from_symbols(i, previous.poem())
                    };
                    self.step += 1;
                    if state.is_open(tile) {
                        return Some(tile);
                    }
                }
                None
            }
        }
    }
}
