//! Packed win-pattern counters.
//!
//! There are 19 winning patterns on the 4×4 board: 4 rows, 4 columns, 2
//! diagonals, and 9 overlapping 2×2 squares. Each player's `Cover` keeps one
//! 3-bit counter per pattern inside a single `u64`, ordered from the low
//! bits: rows top to bottom, columns left to right, the down diagonal then
//! the up diagonal, and the squares row-major. A counter holds how many
//! cells of its pattern that player has claimed.
//!
//! Claiming a cell must bump every pattern containing it. Each position has
//! a precomputed constant with a 1 in the low bit of every affected slot, so
//! one 64-bit add increments all of its counters at once. No counter can
//! pass 4 (a pattern has exactly 4 cells and claims are monotonic), and 4 is
//! a power of two, so a pattern is complete exactly when the top bit of its
//! slot is set; one mask over the top bits tests all 19 at once.

/// Number of winning patterns tracked per player.
pub const PATTERN_COUNT: usize = 19;

/// Per-position increment constants; index is the board position.
const INCREMENTS: [u64; 16] = [
    0x41001001,
    0x240008001,
    0x1200040001,
    0x1008200001,
    0x8040001008,
    0x48241008008,
    0x241208040008,
    0x201000200008,
    0x1008000001040,
    0x9048008008040,
    0x48240001040040,
    0x40200000200040,
    0x1000008001200,
    0x9000000008200,
    0x48000000040200,
    0x40000001200200,
];

/// A 1 in the top bit of every 3-bit slot; a counter reaching 4 sets it.
const COMPLETE_MASK: u64 = 0x124924924924924;

/// One player's claim counts across all 19 winning patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cover(u64);

impl Cover {
    /// Records a claim at board position `pos`, incrementing the counter of
    /// every pattern that contains it.
    pub fn add(&mut self, pos: usize) {
        self.0 += INCREMENTS[pos];
    }

    /// Whether any pattern is fully claimed.
    pub fn any_complete(self) -> bool {
        self.0 & COMPLETE_MASK != 0
    }

    /// The claim count for one pattern slot, 0..=4.
    pub fn count(self, pattern: usize) -> u8 {
        debug_assert!(pattern < PATTERN_COUNT);
        ((self.0 >> (pattern * 3)) & 0b111) as u8
    }
}
