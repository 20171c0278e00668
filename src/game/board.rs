use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SeedError;

/// Number of cells on the board, and equally the number of distinct tiles.
pub const TILE_COUNT: usize = 16;

const PLANT_GLYPHS: [char; 4] = ['M', 'C', 'P', 'I']; // maple, cherry, pine, iris
const POEM_GLYPHS: [char; 4] = ['s', 'b', 'r', 'p']; // sun, bird, rain, paper

/// A tile symbol: a (plant, poem) pair packed into four bits, plant in the
/// high two. Moves are identified by tile, not by grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(u8);

impl Tile {
    pub fn new(encoding: u8) -> Tile {
        debug_assert!((encoding as usize) < TILE_COUNT);
        Tile(encoding)
    }

    pub fn from_symbols(plant: u8, poem: u8) -> Tile {
        debug_assert!(plant < 4 && poem < 4);
        Tile(plant << 2 | poem)
    }

    pub fn encoding(self) -> u8 {
        self.0
    }

    /// Plant symbol, 0..=3.
    pub fn plant(self) -> u8 {
        self.0 >> 2
    }

    /// Poem symbol, 0..=3.
    pub fn poem(self) -> u8 {
        self.0 & 3
    }

    /// Whether this tile may follow `previous` under the adjacency rule.
    pub fn matches(self, previous: Tile) -> bool {
        self.plant() == previous.plant() || self.poem() == previous.poem()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            PLANT_GLYPHS[self.plant() as usize],
            POEM_GLYPHS[self.poem() as usize]
        )
    }
}

/// The fixed tile layout of one match. Position `pos` maps to grid row
/// `pos / 4` and column `pos % 4`; the layout never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
    positions: [u8; TILE_COUNT],
}

impl Board {
    /// Decodes a layout seed: 16 nibbles, low nibble first, each naming the
    /// tile at that position. Fails if any tile appears twice, which also
    /// covers every other way for the nibbles not to be a permutation.
    pub fn from_seed(seed: u64) -> Result<Board, SeedError> {
        let mut tiles = [Tile(0); TILE_COUNT];
        let mut positions = [0u8; TILE_COUNT];
        let mut seen = [false; TILE_COUNT];
        let mut rest = seed;
        for (pos, slot) in tiles.iter_mut().enumerate() {
            let tile = (rest & 0xF) as u8;
            if seen[tile as usize] {
                return Err(SeedError::DuplicateTile { seed, tile });
            }
            seen[tile as usize] = true;
            *slot = Tile(tile);
            positions[tile as usize] = pos as u8;
            rest >>= 4;
        }
        Ok(Board { tiles, positions })
    }

    /// The tile at board position `pos`.
    pub fn tile_at(&self, pos: usize) -> Tile {
        self.tiles[pos]
    }

    /// The board position holding `tile`; inverse of [`Board::tile_at`].
    pub fn position_of(&self, tile: Tile) -> usize {
        self.positions[tile.encoding() as usize] as usize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            for col in 0..4 {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.tiles[row * 4 + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Packs a position → tile layout into the seed format consumed by
/// [`Board::from_seed`].
pub fn pack_seed(tiles: &[u8; TILE_COUNT]) -> u64 {
    tiles
        .iter()
        .enumerate()
        .fold(0u64, |seed, (pos, &tile)| {
            seed | (u64::from(tile) & 0xF) << (pos * 4)
        })
}

/// A freshly shuffled layout seed. The RNG is an explicit parameter so
/// callers can reproduce a layout.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    let mut tiles: [u8; TILE_COUNT] = std::array::from_fn(|i| i as u8);
    tiles.shuffle(rng);
    pack_seed(&tiles)
}

/// Whether `pos` lies on the outer ring of the grid. The four interior
/// cells are illegal first moves.
pub fn is_border(pos: usize) -> bool {
    let (row, col) = (pos >> 2, pos & 3);
    row == 0 || row == 3 || col == 0 || col == 3
}
