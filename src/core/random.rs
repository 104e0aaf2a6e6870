use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The one pseudo-random generator a sweep draws from.
///
/// Passed by `&mut` into every sampling call instead of living in a global, so
/// tests can seed it and a parallel caller would have to hold one per worker.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniformly picks `amount` items into a sub-slice and returns it. Only
    /// `amount` swaps are made; the order of the rest is unspecified.
    pub fn partial_shuffle<'a, T>(&mut self, items: &'a mut [T], amount: usize) -> &'a mut [T] {
        let (chosen, _) = items.partial_shuffle(&mut self.rng, amount);
        chosen
    }

    /// Uniform draw from `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_range() {
        let mut rs = RandomSource::seeded(7);
        for _ in 0..10_000 {
            let x = rs.uniform();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
        }
    }

    #[test]
    fn test_shuffle_keeps_items() {
        let mut rs = RandomSource::seeded(3);
        let mut items = (0..50).collect::<Vec<u32>>();
        rs.shuffle(&mut items);
        items.sort();
        assert_eq!((0..50).collect::<Vec<u32>>(), items);
    }

    #[test]
    fn test_partial_shuffle_amount() {
        let mut rs = RandomSource::seeded(11);
        let mut items = (0..20).collect::<Vec<u32>>();
        let chosen = rs.partial_shuffle(&mut items, 5).to_vec();
        assert_eq!(5, chosen.len());
        let mut all = items.clone();
        all.sort();
        assert_eq!((0..20).collect::<Vec<u32>>(), all);
    }

    #[test]
    fn test_partial_shuffle_clamps() {
        let mut rs = RandomSource::seeded(11);
        let mut items = vec![1, 2, 3];
        assert_eq!(3, rs.partial_shuffle(&mut items, 10).len());
    }
}
