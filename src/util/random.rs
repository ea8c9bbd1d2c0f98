//! Uniform-interval random arrays.

use rand::Rng;

/// One integer drawn uniformly from `min..=max` (bounds in either order).
pub fn random_in_interval<R: Rng + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
) -> u32 {
    rng.random_range(min.min(max)..=min.max(max))
}

/// `length` integers drawn uniformly from `min..=max`.
pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    min: u32,
    max: u32,
) -> Vec<u32> {
    (0..length)
        .map(|_| random_in_interval(rng, min, max))
        .collect()
}
