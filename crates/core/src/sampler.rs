use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

/// Source of uniform draws for the planner. Swap in a seeded or scripted
/// implementation to make generation reproducible.
pub trait Sampler {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform value in `[low, high)`.
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.unit() * (high - low)
    }
}

#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// Sampler backed by a xorshift stream, seeded or from OS entropy.
pub type SeededSampler = RngSampler<XorShiftRng>;

impl SeededSampler {
    pub fn seeded(seed: u64) -> Self {
        Self::new(XorShiftRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(XorShiftRng::from_entropy())
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Draws without replacement by removing a random element from a working
/// copy until `count` items are taken or the pool is empty.
pub fn sample_without_replacement<T: Clone, S: Sampler + ?Sized>(
    items: &[T],
    count: usize,
    sampler: &mut S,
) -> Vec<T> {
    let mut pool = items.to_vec();
    let mut picked = Vec::with_capacity(count.min(pool.len()));

    while !pool.is_empty() && picked.len() < count {
        let index = sampler.index(pool.len());
        picked.push(pool.remove(index));
    }

    picked
}
