//! Kitchen tip selection.

use rand::Rng;

use crate::error::ComposeError;

/// Pick one tip uniformly at random from `pool`.
///
/// The random source is passed in so callers can seed it.
pub fn pick_tip<'a, R: Rng>(
    pool: &'a [String],
    rng: &mut R,
) -> Result<&'a str, ComposeError> {
    if pool.is_empty() {
        return Err(ComposeError::EmptyTipPool);
    }
    let index = rng.random_range(0..pool.len());
    tracing::debug!(index, pool_size = pool.len(), "picked tip");
    Ok(&pool[index])
}
