//! Seeded linear congruential generator.
//!
//! The stream is a pure function of the seed so tests and simulations can
//! replay games exactly. It also implements [`rand::RngCore`], which lets the
//! same stream drive `rand::Rng` helpers such as ship placement.

use rand::RngCore;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// `s' = (s * 1664525 + 1013904223) mod 2^32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSource {
    state: u32,
}

impl RandomSource {
    /// Seeds wider than 32 bits are reduced mod 2^32, which yields the same
    /// stream as applying the recurrence to the full value.
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }

    /// Seed from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>() as u64)
    }

    pub fn reseed(&mut self, seed: u64) {
        self.state = seed as u32;
    }

    /// Current internal state; feeding it to [`RandomSource::new`] continues
    /// the stream from here.
    pub fn seed(&self) -> u32 {
        self.state
    }

    #[inline]
    fn advance(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.advance() as f64 / MODULUS
    }

    /// Uniform integer in `[0, max)`; `0` when `max` is `0`.
    pub fn next_int(&mut self, max: usize) -> usize {
        libm::floor(self.next_f64() * max as f64) as usize
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_int(items.len()))
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.advance() as u64;
        let lo = self.advance() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}
