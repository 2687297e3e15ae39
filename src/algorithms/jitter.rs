use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the tie-breaking jitter added to every score.
pub const JITTER_MAX: f64 = 0.1;

/// Source of the small additive term used to break ties between equally
/// scored candidates. Every value must lie in `[0, JITTER_MAX)`.
pub trait JitterSource {
    fn next_jitter(&mut self) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_jitter(&mut self) -> f64 {
        (**self).next_jitter()
    }
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn next_jitter(&mut self) -> f64 {
        (**self).next_jitter()
    }
}

#[derive(Debug, Clone)]
pub struct UniformJitter<R: Rng> {
    rng: R,
    max: f64,
}

impl<R: Rng> UniformJitter<R> {
    /// `max` is clamped into `[0, JITTER_MAX]`; a bound of 0 disables the
    /// jitter entirely.
    pub fn new(rng: R, max: f64) -> Self {
        let max = if max.is_finite() { max.clamp(0.0, JITTER_MAX) } else { JITTER_MAX };
        Self { rng, max }
    }
}

impl UniformJitter<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), JITTER_MAX)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), JITTER_MAX)
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn next_jitter(&mut self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..self.max)
    }
}

/// Disables jitter, so results are ordered by raw score alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn next_jitter(&mut self) -> f64 {
        0.0
    }
}

/// Replays a fixed sequence, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedJitter {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedJitter {
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, JITTER_MAX - f64::EPSILON) } else { 0.0 })
            .collect();
        Self { values, cursor: 0 }
    }
}

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_jitter_range() {
        let mut jitter = UniformJitter::seeded(42);
        for _ in 0..10_000 {
            let value = jitter.next_jitter();
            assert!((0.0..JITTER_MAX).contains(&value));
        }
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let mut a = UniformJitter::seeded(7);
        let mut b = UniformJitter::seeded(7);
        let xs: Vec<f64> = (0..16).map(|_| a.next_jitter()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.next_jitter()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_zero_bound_disables_jitter() {
        let mut jitter = UniformJitter::new(StdRng::seed_from_u64(1), 0.0);
        assert_eq!(jitter.next_jitter(), 0.0);
    }

    #[test]
    fn test_fixed_jitter_cycles_and_clamps() {
        let mut jitter = FixedJitter::new(vec![0.01, 0.5, -1.0]);
        assert_eq!(jitter.next_jitter(), 0.01);
        assert!(jitter.next_jitter() < JITTER_MAX);
        assert_eq!(jitter.next_jitter(), 0.0);
        assert_eq!(jitter.next_jitter(), 0.01);

        let mut empty = FixedJitter::new(Vec::new());
        assert_eq!(empty.next_jitter(), 0.0);
    }

    #[test]
    fn test_borrowed_source() {
        fn draw<J: JitterSource>(mut source: J) -> f64 {
            source.next_jitter()
        }

        let mut inner = FixedJitter::new(vec![0.02, 0.03]);
        assert_eq!(draw(&mut inner), 0.02);
        assert_eq!(inner.next_jitter(), 0.03);
    }
}
