//! Seedable pseudo-random source (xorshift32)

const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Deterministic RNG injected through config so runs can be replayed.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // xorshift gets stuck at zero
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [lo, hi)
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Uniform in [-1, 1)
    #[inline]
    pub fn signed_unit(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }

    #[inline]
    pub fn sign(&mut self) -> f32 {
        if self.next_u32() & 1 == 0 { 1.0 } else { -1.0 }
    }
}
