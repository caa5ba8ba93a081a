//! Seeded random number generation.
//!
//! Ports the ARC4 generator from David Bau's `seedrandom.js` v3 (the build
//! the game page ships as `Math.seedrandom`). The board pipeline consumes
//! `quick()` values, so this port has to match the JS stream bit for bit:
//! same key fold, same key schedule, same 256-byte warm-up drop, same
//! byte-to-float scaling. `rand` distributions cannot reproduce a foreign
//! generator's exact sequence, which is why this module rolls its own.

const WIDTH: usize = 256;
const MASK: usize = 255;

/// Bytes folded into the 48-bit starting numerator of `double()`.
const CHUNKS: u32 = 6;
/// 256^6, the starting denominator of `double()`.
const START_DENOM: f64 = 281474976710656.0;
/// 2^52, the target numerator magnitude of `double()`.
const SIGNIFICANCE: f64 = 4503599627370496.0;
/// 2^53, the numerator overflow bound of `double()`.
const OVERFLOW: f64 = 9007199254740992.0;
/// 2^32, the `quick()` scale.
const TWO_POW_32: f64 = 4294967296.0;

/// The `Math.seedrandom(seed)` generator: ARC4 keyed by a string seed.
///
/// Any string is a valid seed, including the empty string. Two instances
/// with the same seed produce identical streams forever.
pub struct SeedRandom {
    s: [u8; WIDTH],
    i: u8,
    j: u8,
}

impl SeedRandom {
    pub fn new(seed: &str) -> Self {
        let key = mix_key(seed);

        // RC4 key schedule.
        let mut s = [0u8; WIDTH];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut j = 0usize;
        for i in 0..WIDTH {
            let t = s[i];
            j = (j + usize::from(key[i % key.len()]) + usize::from(t)) & MASK;
            s[i] = s[j];
            s[j] = t;
        }

        // The JS constructor discards an initial 256-byte block.
        let mut rng = SeedRandom { s, i: 0, j: 0 };
        for _ in 0..WIDTH {
            rng.next_byte();
        }
        rng
    }

    /// One step of the RC4 output loop.
    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.s[self.i as usize] = self.s[self.j as usize];
        self.s[self.j as usize] = t;
        self.s[usize::from(self.s[self.i as usize].wrapping_add(t))]
    }

    /// `count` output bytes folded most-significant first, as JS
    /// `r = r * 256 + byte`.
    fn g(&mut self, count: u32) -> u64 {
        let mut r: u64 = 0;
        for _ in 0..count {
            r = (r << 8) | u64::from(self.next_byte());
        }
        r
    }

    /// `prng.quick()`: 32 bits of randomness in [0, 1). This is the only
    /// method the game page ever calls.
    pub fn quick(&mut self) -> f64 {
        self.g(4) as f64 / TWO_POW_32
    }

    /// `prng()`: a full 53-bit double in [0, 1).
    ///
    /// The numerator/denominator widening runs in f64 on purpose so every
    /// intermediate rounding matches the JS arithmetic.
    pub fn double(&mut self) -> f64 {
        let mut n = self.g(CHUNKS) as f64;
        let mut d = START_DENOM;
        let mut x: u32 = 0;
        while n < SIGNIFICANCE {
            n = (n + f64::from(x)) * 256.0;
            d *= 256.0;
            x = u32::from(self.next_byte());
        }
        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }
        (n + f64::from(x)) / d
    }

    /// `prng.int32()`: 32 output bits reinterpreted as a signed integer.
    pub fn int32(&mut self) -> i32 {
        self.g(4) as u32 as i32
    }
}

/// The `mixkey` fold: smear the seed's UTF-16 code units over at most 256
/// key slots.
///
/// On the first pass over a slot the JS reads `undefined`, multiplies it to
/// NaN and XORs it into the smear as 0, so seeds shorter than 257 units get
/// the plain `code & 255` per slot; longer seeds re-mix earlier slots.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;
    for (j, code) in seed.encode_utf16().enumerate() {
        let slot = j & MASK;
        if slot < key.len() {
            smear ^= u32::from(key[slot]) * 19;
            key[slot] = ((smear + u32::from(code)) & 255) as u8;
        } else {
            key.push((u32::from(code) & 255) as u8);
        }
    }
    // The JS ARC4 constructor substitutes [0] for an empty key.
    if key.is_empty() {
        key.push(0);
    }
    key
}
