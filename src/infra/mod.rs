//! Инфраструктурный слой: RNG-реализации для симулятора и политики.

pub mod rng;

pub use rng::{DeterministicRng, SystemRng};
