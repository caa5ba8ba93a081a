//! WebAssembly winning-seed searcher for the Hlinena Bingo board.
//!
//! The game page derives its 4x4 board from a per-device seed cookie: the
//! seed string keys a `Math.seedrandom` generator, the generator shuffles
//! the dictionary, and the first 16 words become the board. This crate
//! replays that pipeline bit-exactly, searches candidate seeds until four
//! chosen words land on a winning line, and computes the cookie/storage
//! payloads that make the host adopt the found seed.
//!
//! The core is pure and synchronous. Dictionary fetching, cookie writes and
//! reload timing stay in the embedding page; progress is reported through
//! the `log` facade for whichever logger the embedder installs.

pub mod board;
pub mod lines;
pub mod rng;
pub mod search;
pub mod seed;
pub mod state;

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;

    use crate::board;
    use crate::search::{self, SearchResult, DEFAULT_ROUND_PREFIX};
    use crate::seed::{self, SeedToken};
    use crate::state;

    /// Coerce a JS array into owned strings, rejecting non-string entries.
    fn string_vec(arr: &js_sys::Array, what: &str) -> Result<Vec<String>, JsError> {
        arr.iter()
            .map(|value| {
                value
                    .as_string()
                    .ok_or_else(|| JsError::new(&format!("{} entries must be strings", what)))
            })
            .collect()
    }

    /// Search for a seed whose board puts the four `words` on a winning line.
    /// Returns `{ seed, attempts, board, positions, winningLineIndices }` or
    /// `null` if `max_attempts` runs out; rejected configurations throw.
    #[wasm_bindgen(js_name = "searchWinningBoard")]
    pub fn wasm_search_winning_board(
        dict: js_sys::Array,
        words: js_sys::Array,
        max_attempts: u32,
        round_prefix: Option<String>,
    ) -> Result<JsValue, JsError> {
        let pool = string_vec(&dict, "dictionary")?;
        // The page passes words straight from an input field.
        let targets: Vec<String> = string_vec(&words, "target")?
            .iter()
            .map(|w| w.trim().to_string())
            .collect();
        let prefix = round_prefix.unwrap_or_else(|| DEFAULT_ROUND_PREFIX.to_string());

        match search::search_winning_seed(&pool, &targets, max_attempts, &prefix)? {
            Some(result) => Ok(serde_wasm_bindgen::to_value(&result)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// The 16-word board the host renders for a stored seed token.
    #[wasm_bindgen(js_name = "boardForSeed")]
    pub fn wasm_board_for_seed(dict: js_sys::Array, seed_token: &str) -> Result<JsValue, JsError> {
        let pool = string_vec(&dict, "dictionary")?;
        let token = SeedToken::parse(seed_token)?;
        Ok(serde_wasm_bindgen::to_value(&board::board_for_seed(
            &pool, &token,
        ))?)
    }

    /// The deterministic seed token for an arbitrary input string.
    #[wasm_bindgen(js_name = "deriveSeedToken")]
    pub fn wasm_derive_seed_token(input: &str) -> String {
        seed::derive_seed_token(input).to_string()
    }

    /// Cookie / storage payloads for a search result:
    /// `{ seed, checked, win }`.
    #[wasm_bindgen(js_name = "forgeWinState")]
    pub fn wasm_forge_win_state(result: JsValue) -> Result<JsValue, JsError> {
        let result: SearchResult = serde_wasm_bindgen::from_value(result)?;
        Ok(serde_wasm_bindgen::to_value(&state::forge_win_state(
            &result,
        ))?)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM seeker ready".to_string()
    }
}
