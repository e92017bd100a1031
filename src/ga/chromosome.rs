//! Genetic operators on [`Assignment`] chromosomes.
//!
//! # Encoding
//!
//! Gene `i` is the VM index for task `i` (or `None`). Operators only ever
//! write in-range VM indices, so `None` genes appear only when supplied
//! from outside (e.g. a baseline seed).

use rand::Rng;

use crate::error::{PlacementError, Result};
use crate::models::Assignment;

/// Random chromosome: every task mapped to a uniformly random VM.
///
/// No repair is applied; the result may overload VMs.
///
/// # Panics
/// Panics if `num_vms` is 0.
pub fn random_assignment<R: Rng>(num_tasks: usize, num_vms: usize, rng: &mut R) -> Assignment {
    (0..num_tasks)
        .map(|_| Some(rng.random_range(0..num_vms)))
        .collect::<Vec<_>>()
        .into()
}

/// Single-point crossover.
///
/// Picks a cut in `[1, len - 1]` and swaps tails. Chromosomes shorter than
/// two genes have no valid cut; the children are copies of the parents.
///
/// # Errors
/// [`PlacementError::ChromosomeLengthMismatch`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    a: &Assignment,
    b: &Assignment,
    rng: &mut R,
) -> Result<(Assignment, Assignment)> {
    if a.len() != b.len() {
        return Err(PlacementError::ChromosomeLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.len() < 2 {
        return Ok((a.clone(), b.clone()));
    }

    let cut = rng.random_range(1..a.len());
    let (a_head, a_tail) = a.genes().split_at(cut);
    let (b_head, b_tail) = b.genes().split_at(cut);

    let c1 = [a_head, b_tail].concat();
    let c2 = [b_head, a_tail].concat();
    Ok((c1.into(), c2.into()))
}

/// Per-gene mutation: each gene is re-drawn uniformly with probability `rate`.
pub fn uniform_mutation<R: Rng>(
    chromosome: &mut Assignment,
    num_vms: usize,
    rate: f64,
    rng: &mut R,
) {
    for gene in chromosome.genes_mut() {
        if rng.random::<f64>() < rate {
            *gene = Some(rng.random_range(0..num_vms));
        }
    }
}
