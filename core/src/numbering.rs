//! Receiver-number assignment.
//!
//! The participant-facing read path masks receiver identity behind an
//! integer label drawn from 1..=N. Any permutation is acceptable here,
//! so a single uniform shuffle suffices and there is no rejection loop.

use crate::rng::ShuffleSource;

/// Uniform random bijection from positions to the numbers 1..=n.
pub fn draw_numbers(n: usize, rng: &mut impl ShuffleSource) -> Vec<u32> {
    let mut numbers: Vec<u32> = (1..=n as u32).collect();
    rng.shuffle(&mut numbers);
    numbers
}
