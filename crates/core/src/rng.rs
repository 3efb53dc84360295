//! RNG module - seedable random source for piece selection
//!
//! The spawner only needs integers in a range, so the dependency is a small
//! trait. [`SimpleRng`] is a deterministic LCG that tests and the runner seed
//! explicitly.

/// Source of pseudo-random integers
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // 0 is remapped so every seed yields a usable stream
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; hand out the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Useful for forcing a piece order: feeding `kind index` values to a
/// uniform spawner yields exactly those kinds.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
