//! services/clinic/src/adapters/random.rs

use petopia_core::ports::RandomSource;
use rand::Rng;

/// Randomness from the calling thread's rng, used for booking-id suffixes.
#[derive(Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn below(&self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper)
    }
}
