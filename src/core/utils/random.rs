//! Deterministic random source for spawn defaults (xorshift32)

/// Advance a xorshift32 state and return the new value
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub const DEFAULT_SEED: u32 = 12345;

    pub fn new(seed: u32) -> Self {
        // xorshift never leaves zero
        Self { state: if seed == 0 { Self::DEFAULT_SEED } else { seed } }
    }

    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Uniform value in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        xorshift32(&mut self.state) as f64 / (u32::MAX as f64 + 1.0)
    }

    /// +1.0 or -1.0 with equal odds
    pub fn sign(&mut self) -> f64 {
        if self.next_f64() > 0.5 { 1.0 } else { -1.0 }
    }

    /// Value in [min, max), truncated toward zero when `as_int`,
    /// with a random sign unless `only_positive`.
    pub fn range(&mut self, min: f64, max: f64, as_int: bool, only_positive: bool) -> f64 {
        let mut value = self.next_f64() * (max - min) + min;
        if as_int {
            value = value.trunc();
        }
        if only_positive {
            value
        } else {
            value * self.sign()
        }
    }

    /// Pick one element; `None` for an empty slice
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_f64() * items.len() as f64) as usize;
        items.get(idx.min(items.len() - 1))
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}
