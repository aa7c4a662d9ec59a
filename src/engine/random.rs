use rand::Rng;
use rand::seq::index;
use crate::error::SlotError;

/// Uniform index into a list of `len` items.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "cannot pick from an empty list");
    rng.random_range(0..len)
}

/// `count` distinct indices into a list of `len` items, in random order.
pub fn distinct_indices<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize) -> Result<Vec<usize>, SlotError> {
    if count > len {
        return Err(SlotError::NotEnoughCandidates {
            requested: count,
            available: len,
        });
    }
    Ok(index::sample(rng, len, count).into_vec())
}
