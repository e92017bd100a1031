//! Selection and elitism over a fitness vector (lower = better).

use rand::Rng;

/// Tournament selection: samples `k` distinct indices and returns the one
/// with the lowest fitness. Ties go to the earliest sampled index.
///
/// `k` is clamped to `1..=fitnesses.len()`.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn tournament_select<R: Rng>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "tournament over an empty population");
    let k = k.clamp(1, fitnesses.len());
    rand::seq::index::sample(rng, fitnesses.len(), k)
        .iter()
        .min_by(|&a, &b| fitnesses[a].total_cmp(&fitnesses[b]))
        .unwrap_or(0)
}

/// Indices of the `count` best individuals, best first.
///
/// Stable: equal fitness keeps population order.
pub fn elite_indices(fitnesses: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitnesses.len()).collect();
    order.sort_by(|&a, &b| fitnesses[a].total_cmp(&fitnesses[b]));
    order.truncate(count);
    order
}
