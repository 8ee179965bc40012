use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::strategy::RandomSource;

/// Боевой RNG поверх thread-local генератора `rand`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed — одинаковые перемешивания и одинаковые решения
/// рандомизированных веток политики.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
