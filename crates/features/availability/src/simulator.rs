use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shared random source for the simulated checks.
#[derive(Debug)]
pub struct Simulator {
    rng: Mutex<StdRng>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self { rng: Mutex::new(StdRng::from_os_rng()) }
    }
}

impl Simulator {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// `true` with the given probability. Values outside `0.0..=1.0` saturate.
    pub fn draw(&self, probability: f64) -> bool {
        self.rng.lock().random::<f64>() < probability
    }
}
