//! Win-state forging: the persisted artifacts the host trusts.
//!
//! Ports `applyWinningSeed()` from the game page, minus the DOM writes. The
//! cookie and localStorage payloads are computed here, byte-identical to
//! what the page's own `JSON.stringify` calls produce; the embedder performs
//! the actual writes plus its cookie-expiry and reload timing.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_CELLS;
use crate::search::SearchResult;
use crate::seed::SeedToken;

/// Cookie the host reads its per-device seed from.
pub const SEED_COOKIE_NAME: &str = "hlinena_bingo_device_unique_seed";
/// localStorage key holding the 16 per-cell resolved flags.
pub const CHECKED_STORAGE_KEY: &str = "checked";
/// localStorage key holding the host's own win verdict.
pub const WIN_STORAGE_KEY: &str = "win";
/// localStorage key echoing the last externally applied seed.
pub const LAST_APPLIED_SEED_KEY: &str = "hlinena_last_applied_seed";

/// The artifacts that make the host render a completed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinState {
    /// Value for the seed cookie.
    pub seed: SeedToken,
    /// Per-cell resolved flags, row-major; the matched line's cells are true.
    pub checked: [bool; BOARD_CELLS],
    /// Always false. The host re-runs its own detection against the board it
    /// renders for `seed`, and that verdict is the one that must stand.
    pub win: bool,
}

/// The persisted state for a search hit.
///
/// Pure: forging the same result twice yields identical artifacts.
pub fn forge_win_state(result: &SearchResult) -> WinState {
    let mut checked = [false; BOARD_CELLS];
    for &idx in &result.winning_line {
        if let Some(flag) = checked.get_mut(idx) {
            *flag = true;
        }
    }
    WinState {
        seed: result.seed,
        checked,
        win: false,
    }
}

impl WinState {
    /// The cookie pair the embedder writes.
    pub fn cookie(&self) -> (&'static str, String) {
        (SEED_COOKIE_NAME, self.seed.to_string())
    }

    /// The three storage pairs, values rendered exactly as the host's own
    /// `JSON.stringify` writes them. The seed echo is the raw token string.
    pub fn storage_entries(&self) -> [(&'static str, String); 3] {
        [
            (CHECKED_STORAGE_KEY, serde_json::json!(self.checked).to_string()),
            (WIN_STORAGE_KEY, serde_json::json!(self.win).to_string()),
            (LAST_APPLIED_SEED_KEY, self.seed.to_string()),
        ]
    }
}
