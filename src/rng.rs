use std::{
    cell::Cell,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::Error;

/// The increment used to update the state of the RNG. This value is coprime to 2^64, and
/// `INCREMENT / 2^64` is approximately `phi - 1`, where `phi` is the golden ratio. This
/// produces a low discrepancy sequence with a period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// These constants, like the `INCREMENT` constant, are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

#[derive(Debug)]
/// A random number generator that can be used in single-threaded contexts without a mutable
/// reference.
///
/// The implementation is based on hashing the Weyl sequence with `wyhash`, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h.
pub struct Rng {
    /// The current state of the RNG.
    state: Cell<u64>,
}

impl Rng {
    /// Initializes a new RNG seeded from the wall clock, once, at the time of the call. Two
    /// instances created within the same clock quantum share a seed; callers that need
    /// reproducible output should use [`Rng::with_seed`] instead.
    ///
    /// Returns an error if the system clock reads earlier than the Unix epoch, rather than
    /// falling back to a fixed seed.
    pub fn new() -> Result<Self, Error> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
        let seed = wyhash(elapsed.as_nanos() as u64);
        Ok(Self::with_seed(seed))
    }

    /// Initializes a new RNG with the given `seed`. Equal seeds yield equal sequences.
    ///
    /// # Example
    /// ```
    /// # use glyphgrid::Rng;
    /// let a = Rng::with_seed(1234);
    /// let b = Rng::with_seed(1234);
    /// assert_eq!(a.bounded(0, 100), b.bounded(0, 100));
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        let state = Cell::new(seed);
        Self { state }
    }

    /// Resets the RNG to the sequence produced by `seed`.
    pub fn reseed(&self, seed: u64) {
        self.state.set(seed);
    }

    /// Returns a uniformly distributed `u64` in the range `[low, high)`, using widening
    /// multiplication with rejection to avoid modulo bias.
    ///
    /// # Example
    /// ```
    /// # use glyphgrid::Rng;
    /// let rng = Rng::with_seed(5678);
    /// let value = rng.bounded(10, 20);
    /// assert!(value >= 10 && value < 20);
    /// ```
    ///
    /// # Panics
    /// Panics if the range is empty.
    pub fn bounded(&self, low: u64, high: u64) -> u64 {
        assert!(low < high, "cannot draw a value from an empty range");
        let width = high - low;
        let mut x = self.u64();
        let mut m = (x as u128) * (width as u128);
        let mut l = m as u64;
        if l < width {
            let mut t = u64::MAX - width;
            if t >= width {
                t -= width;
                if t >= width {
                    t %= width;
                }
            }
            while l < t {
                x = self.u64();
                m = (x as u128) * (width as u128);
                l = m as u64;
            }
        }
        (m >> 64) as u64 + low
    }

    /// Fills the slice `data` with random bytes.
    pub fn bytes(&self, data: &mut [u8]) {
        const CHUNK_SIZE: usize = std::mem::size_of::<u64>();
        for chunk in data.chunks_exact_mut(CHUNK_SIZE) {
            let value = self.u64();
            chunk.copy_from_slice(&value.to_ne_bytes());
        }
        let last = (data.len() / CHUNK_SIZE) * CHUNK_SIZE;
        let bytes = self.u64().to_ne_bytes();
        for (index, byte) in data[last..].iter_mut().enumerate() {
            *byte = bytes[index];
        }
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub(crate) fn u64(&self) -> u64 {
        // Read the current state and increment it
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));

        // Hash the old state to produce the next value
        wyhash(old_state)
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}
