//! Seed token derivation.
//!
//! Ports `uuidFromSeedString()` from the game page's bootstrap: sixteen
//! bytes drawn as `Math.floor(rng.quick() * 256)` from a generator seeded
//! with the input string, then the version and variant stamps of a random
//! (v4) UUID. The host stores these tokens next to `crypto.randomUUID()`
//! output and cannot tell them apart, which is what makes a found seed
//! adoptable.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rng::SeedRandom;

/// A 128-bit seed token in canonical RFC 4122 shape.
///
/// Comes out of [`derive_seed_token`], or out of [`SeedToken::parse`] for
/// tokens the host already persisted. The `Display` form (lowercase
/// hyphenated, 36 characters) is exactly the string that seeds the board
/// shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedToken(Uuid);

impl SeedToken {
    /// Parse a token string the host issued (cookie value or storage echo).
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(SeedToken)
    }

    #[inline(always)]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SeedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.as_hyphenated().fmt(f)
    }
}

/// The deterministic seed token for `input`.
///
/// A fresh generator keyed by `input` yields the sixteen raw bytes as
/// `floor(quick() * 256)`; `uuid::Builder::from_random_bytes` then applies
/// the same two maskings the page does by hand (version nibble to 4, variant
/// bits to `10`). Same input, same token, no hidden state.
pub fn derive_seed_token(input: &str) -> SeedToken {
    let mut rng = SeedRandom::new(input);
    let mut bytes = [0u8; 16];
    for byte in &mut bytes {
        *byte = (rng.quick() * 256.0).floor() as u8;
    }
    SeedToken(uuid::Builder::from_random_bytes(bytes).into_uuid())
}
