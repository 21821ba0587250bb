//! Path grade rebalancing
//!
//! The grade field exists to steer the search; once a budget-matching
//! path is found, the grades along it are replaced with a designer-
//! readable ramp: non-decreasing, small steps, entrance fixed at 1.
//!
//! Policy: budgeted delta-smoothing. The whole target is treated as a
//! budget of extra grade units over the all-ones baseline; a forward
//! pass allocates a bounded per-step delta to each position, weighted by
//! how many later cells inherit it, and a backward pass greedily spends
//! whatever remains. When the budget exceeds what bounded steps can
//! absorb, the unspent residual is returned rather than silently
//! truncated.

use crate::world::Grid;

/// Largest allowed grade jump between consecutive path cells
pub const MAX_DELTA: u32 = 2;

/// Result of rebalancing a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rebalanced {
    /// New grade per path position, entrance first
    pub grades: Vec<u32>,
    /// Budget the bounded deltas could not absorb; 0 means the grades
    /// sum to the target exactly
    pub residual: u32,
}

/// Compute the smoothed grade ramp for a path of length `n`.
///
/// `grades[0]` is always 1. Each later position adds a delta in
/// `0..=MAX_DELTA`, so the sequence is non-decreasing and never jumps
/// by more than [`MAX_DELTA`]. The deltas are chosen so the total sum
/// reaches `target` whenever that is possible under the step bound.
pub fn smooth_path_grades(path_len: usize, target: u32) -> Rebalanced {
    let n = path_len;
    if n == 0 {
        return Rebalanced {
            grades: Vec::new(),
            residual: target,
        };
    }

    // Grade 1 on every cell is the floor; only the excess is allocated.
    let mut budget = target.saturating_sub(n as u32);
    let mut deltas = vec![0u32; n];

    // Forward pass: position i raises every grade from i onward, so a
    // one-unit delta there costs n - i budget units.
    for i in 1..n {
        let weight = (n - i) as u32;
        let delta = (budget / weight).min(MAX_DELTA);
        deltas[i] = delta;
        budget -= delta * weight;
    }

    // Backward pass: spend any remainder wherever a step still has
    // headroom and the budget covers its weight.
    for i in (1..n).rev() {
        let weight = (n - i) as u32;
        while deltas[i] < MAX_DELTA && budget >= weight {
            deltas[i] += 1;
            budget -= weight;
        }
    }

    let mut grades = Vec::with_capacity(n);
    let mut acc = 1u32;
    grades.push(acc);
    for &delta in &deltas[1..] {
        acc += delta;
        grades.push(acc);
    }

    Rebalanced {
        grades,
        residual: budget,
    }
}

/// Overwrite the grades of every path cell with the smoothed ramp.
///
/// Non-path cells keep their field grades. Returns the unspent
/// residual, which the caller is expected to surface.
pub fn rebalance_path(grid: &mut Grid, path: &[(i32, i32)], target: u32) -> u32 {
    let rebalanced = smooth_path_grades(path.len(), target);
    if rebalanced.residual > 0 {
        log::warn!(
            "path of {} rooms cannot absorb target {} under step bound {}; {} grade units unspent",
            path.len(),
            target,
            MAX_DELTA,
            rebalanced.residual
        );
    }
    for (&(x, y), &grade) in path.iter().zip(&rebalanced.grades) {
        grid.set_grade(x, y, grade);
    }
    rebalanced.residual
}
