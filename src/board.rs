//! Board shuffling: the host's seed-to-board procedure.
//!
//! Ports `shuffledBoardForSeed()` from the game page: walk the whole
//! dictionary in ascending positions, swapping each with
//! `Math.floor(rng.quick() * len)`. That is the page's own shuffle variant,
//! not canonical Fisher-Yates, and reproducing its exact draw and swap order
//! is the point. The first 16 entries of the result become the 4x4 board.

use serde::{Deserialize, Serialize};

use crate::rng::SeedRandom;
use crate::seed::SeedToken;

/// Cells on the board.
pub const BOARD_CELLS: usize = 16;
/// Cells per row and per column.
pub const GRID_SIZE: usize = 4;

/// The rendered 4x4 board, row-major: `cells[row * 4 + col]`.
///
/// Serializes as a bare 16-element array, the shape the page scripts pass
/// around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub cells: Vec<String>,
}

impl Board {
    /// Position of `word` on the board, if present.
    pub fn position_of(&self, word: &str) -> Option<usize> {
        self.cells.iter().position(|c| c == word)
    }
}

/// The full shuffled order of pool indices for `token`.
///
/// A fresh generator is keyed by the token's canonical string form. The walk
/// covers the whole pool even though only the first [`BOARD_CELLS`] entries
/// are ever rendered, because every draw advances the generator and a
/// shortened walk would change the visible prefix.
pub fn shuffled_order(pool_len: usize, token: &SeedToken) -> Vec<u32> {
    let mut order: Vec<u32> = (0..pool_len as u32).collect();
    let mut rng = SeedRandom::new(&token.to_string());
    let len = pool_len as f64;
    for i in 0..pool_len {
        // quick() < 1.0, so the product floors below pool_len.
        let swap_index = (rng.quick() * len).floor() as usize;
        order.swap(i, swap_index);
    }
    order
}

/// The board the host renders for `token`.
///
/// `pool` should hold at least [`BOARD_CELLS`] words (the search driver
/// rejects shorter pools up front; fed one directly, this yields the same
/// short board the page would).
pub fn board_for_seed(pool: &[String], token: &SeedToken) -> Board {
    let order = shuffled_order(pool.len(), token);
    Board {
        cells: materialize(pool, &order),
    }
}

/// First [`BOARD_CELLS`] entries of `order`, as owned words.
pub(crate) fn materialize(pool: &[String], order: &[u32]) -> Vec<String> {
    order
        .iter()
        .take(BOARD_CELLS)
        .map(|&idx| pool[idx as usize].clone())
        .collect()
}
