//! Tour perturbation: segment reversal and segment relocation.

use rand::Rng;

/// Largest number of edits applied per perturbation.
const MAX_EDITS: usize = 5;

/// Applies between 1 and 5 random structural edits to `tour` in place.
///
/// Each edit draws a sub-range `[i, j]` and a coin flip: heads reverses the
/// sub-range (a 2-opt move), tails extracts it and splices it back at a
/// random position of the shortened tour (an or-opt relocation). The two
/// neighborhoods reach local optima the other cannot leave.
///
/// Elements are only moved, never duplicated or dropped, so the result is
/// always a permutation of the input.
pub fn perturb<R: Rng>(tour: &mut Vec<usize>, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let edits = rng.random_range(1..=MAX_EDITS);
    for _ in 0..edits {
        let mut i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }
        if rng.random_bool(0.5) {
            tour[i..=j].reverse();
        } else {
            let segment: Vec<usize> = tour.drain(i..=j).collect();
            let at = rng.random_range(0..=tour.len());
            tour.splice(at..at, segment);
        }
    }
}
