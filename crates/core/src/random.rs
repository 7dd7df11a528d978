use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Source of the random decisions made by the mock backend.
pub trait RandomSource: Send + Sync {
    /// Uniform sample in `[0, 1)`.
    fn unit(&self) -> f64;

    /// Uniform index in `[0, upper)`. Returns 0 when `upper` is 0.
    fn below(&self, upper: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn below(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Reproducible source for repeatable CLI runs.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    // A panic while holding the lock leaves the generator state intact.
    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RandomSource for SeededRandom {
    fn unit(&self) -> f64 {
        self.rng().gen::<f64>()
    }

    fn below(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng().gen_range(0..upper)
    }
}
