//! Santa → receiver pairing.
//!
//! A pairing is a derangement of the participant sequence: a permutation
//! in which no element keeps its original index, so nobody draws
//! themselves.

use crate::{
    error::{ExchangeError, ExchangeResult},
    rng::ShuffleSource,
};

/// Shuffle draws attempted before falling back to a rotation.
///
/// A uniform shuffle is a derangement with probability approaching 1/e,
/// so exhausting this bound has probability (1 - 1/e)^1000, effectively
/// zero for any real participant set.
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 1000;

/// Produce a derangement of `items`: position `i` of the result names the
/// receiver for the santa at position `i` of the input, and no position
/// maps to itself. Items must be distinct.
///
/// Rejection sampling over uniform shuffles is uniform over derangements.
/// The rotation fallback taken after [`MAX_SHUFFLE_ATTEMPTS`] is NOT
/// uniform; it only exists so the operation is total, and in practice is
/// reachable only with a degenerate shuffle source.
pub fn derange<T>(items: &[T], rng: &mut impl ShuffleSource) -> ExchangeResult<Vec<T>>
where
    T: Clone + PartialEq,
{
    if items.len() < 2 {
        return Err(ExchangeError::InsufficientParticipants { count: items.len() });
    }

    // Two items admit exactly one derangement; shuffling would reject
    // half the draws for nothing.
    if items.len() == 2 {
        return Ok(vec![items[1].clone(), items[0].clone()]);
    }

    let mut candidate: Vec<T> = items.to_vec();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        rng.shuffle(&mut candidate);
        if is_derangement(items, &candidate) {
            return Ok(candidate);
        }
    }

    log::warn!(
        "no derangement in {MAX_SHUFFLE_ATTEMPTS} shuffles of {} items, rotating instead",
        items.len()
    );
    Ok(rotate_by_one(items))
}

fn is_derangement<T: PartialEq>(original: &[T], candidate: &[T]) -> bool {
    original.iter().zip(candidate.iter()).all(|(a, b)| a != b)
}

/// Move the last item to the front. For distinct items of length >= 2
/// every element shifts off its own index, so the result needs no
/// further validation.
fn rotate_by_one<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rotated = Vec::with_capacity(items.len());
    rotated.push(items[items.len() - 1].clone());
    rotated.extend_from_slice(&items[..items.len() - 1]);
    rotated
}
