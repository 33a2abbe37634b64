//! Инфраструктура вокруг движка: реализации RNG и seed-механика.

pub mod rng;
pub mod rng_seed;

pub use rng::{DeterministicRng, SystemRng};
pub use rng_seed::RngSeed;
