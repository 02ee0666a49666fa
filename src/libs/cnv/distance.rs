//! Rearrangement distance between two copy-number profiles.
//!
//! A profile is an ordered sequence of segment copy counts; zero marks a
//! complete loss. The distance counts the amplification/deletion events
//! needed to turn the base profile into the target one. Zero regions of the
//! target are charged through their boundary values, then removed; the
//! remaining positions are charged through a nearest-suitable-position (NSP)
//! search over the elementwise difference, so that one event can pay for a
//! run of adjacent positions needing the same kind of change.

use itertools::Itertools;

use super::error::ProfileError;

/// Maximal runs of zero values in `profile`, as inclusive `(start, end)`
/// ranges in increasing start order.
///
/// ```
/// use cnp::libs::cnv::zero_intervals;
/// assert_eq!(zero_intervals(&[0, 0, 3, 0, 4, 0]), vec![(0, 1), (3, 3), (5, 5)]);
/// assert!(zero_intervals(&[1, 2]).is_empty());
/// ```
pub fn zero_intervals(profile: &[i32]) -> Vec<(usize, usize)> {
    let mut intervals = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &v) in profile.iter().enumerate() {
        if v == 0 {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(s) = run_start.take() {
            intervals.push((s, i - 1));
        }
    }
    if let Some(s) = run_start {
        intervals.push((s, profile.len() - 1));
    }

    intervals
}

/// Cost contributed by zero regions of the target profile.
///
/// A contiguous deletion can simultaneously explain copy-number excess at its
/// boundary, so each interval is charged only for its peak base value beyond
/// what the larger boundary excess already accounts for.
pub fn zero_intervals_cost(base: &[i32], target: &[i32], intervals: &[(usize, usize)]) -> i32 {
    let n = base.len();
    let mut cost = 0;

    for &(s, t) in intervals {
        // Peak base value spanned by the deleted region
        let m = base[s..=t].iter().copied().max().unwrap_or(0);

        let left = if s > 0 {
            (base[s - 1] - target[s - 1]).max(0)
        } else {
            0
        };
        let right = if t < n - 1 {
            (base[t + 1] - target[t + 1]).max(0)
        } else {
            0
        };
        let mp = left.max(right);

        cost += (m - mp).max(0);
    }

    cost
}

/// Remove the given inclusive index ranges from both profiles in lock-step.
///
/// Returns two new, shorter profiles; kept positions preserve their relative
/// order. Building fresh vectors makes the removal independent of interval
/// ordering.
pub fn remove_intervals(
    base: &[i32],
    target: &[i32],
    intervals: &[(usize, usize)],
) -> (Vec<i32>, Vec<i32>) {
    let mut removed = vec![false; base.len()];
    for &(s, t) in intervals {
        for flag in &mut removed[s..=t] {
            *flag = true;
        }
    }

    let keep = |profile: &[i32]| -> Vec<i32> {
        profile
            .iter()
            .zip(&removed)
            .filter(|(_, &gone)| !gone)
            .map(|(&v, _)| v)
            .collect()
    };

    (keep(base), keep(target))
}

/// Nearest-suitable-position search over zero-free profiles.
///
/// Contract: `base` and `target` have equal length and `target` has no zero
/// entries; the orchestrator guarantees this and it is not re-validated.
///
/// Two monotonic-stack passes find, for each position, the nearest left and
/// right neighbor whose diff value has the same sign and a compatible
/// magnitude. The left pass pops with strict comparisons, the right pass with
/// non-strict ones, and ties between the two candidates go to the right
/// neighbor. This asymmetry is a deliberate deterministic tie-break; changing
/// any comparison changes output values.
///
/// Returns the chosen donor index per position (`None` when no suitable
/// neighbor exists) and the per-position cost.
pub fn nsp_and_costs(base: &[i32], target: &[i32]) -> (Vec<Option<usize>>, Vec<i32>) {
    let n = base.len();
    let diff: Vec<i32> = (0..n).map(|i| base[i] - target[i]).collect();

    // Left pass: strict comparisons
    let mut left_nsp: Vec<Option<usize>> = vec![None; n];
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..n {
        if diff[i] >= 0 {
            while stack.last().is_some_and(|&j| diff[j] > diff[i]) {
                stack.pop();
            }
        } else {
            while stack.last().is_some_and(|&j| diff[j] < diff[i]) {
                stack.pop();
            }
        }
        left_nsp[i] = stack.last().copied();
        stack.push(i);
    }

    // Right pass: non-strict comparisons
    let mut right_nsp: Vec<Option<usize>> = vec![None; n];
    stack.clear();
    for i in (0..n).rev() {
        if diff[i] >= 0 {
            while stack.last().is_some_and(|&j| diff[j] >= diff[i]) {
                stack.pop();
            }
        } else {
            while stack.last().is_some_and(|&j| diff[j] <= diff[i]) {
                stack.pop();
            }
        }
        right_nsp[i] = stack.last().copied();
        stack.push(i);
    }

    let mut nsp: Vec<Option<usize>> = vec![None; n];
    let mut costs: Vec<i32> = vec![0; n];

    for i in 0..n {
        let left = left_nsp[i].map_or(0, |j| diff[j]);
        let right = right_nsp[i].map_or(0, |j| diff[j]);

        let sgn = if diff[i] < 0 { -1 } else { 1 };

        let cost_left = diff[i] * sgn - (left * sgn).max(0);
        let cost_right = diff[i] * sgn - (right * sgn).max(0);

        // Ties go to the right neighbor, even when it is None
        if cost_right <= cost_left {
            costs[i] = cost_right;
            nsp[i] = right_nsp[i];
        } else {
            costs[i] = cost_left;
            nsp[i] = left_nsp[i];
        }
    }

    if log::log_enabled!(log::Level::Debug) {
        let fmt_idx = |v: &[Option<usize>]| {
            v.iter()
                .map(|o| o.map_or_else(|| "-".to_string(), |j| j.to_string()))
                .join(",")
        };
        log::debug!("diff={}", diff.iter().join(","));
        log::debug!("left_nsp={}", fmt_idx(&left_nsp));
        log::debug!("right_nsp={}", fmt_idx(&right_nsp));
        log::debug!("nsp={}", fmt_idx(&nsp));
        log::debug!("costs={}", costs.iter().join(","));
    }

    (nsp, costs)
}

/// Rearrangement distance from `base` to `target`.
///
/// Zero positions in `base` are rejected unless `prune_base_zeros` is set, in
/// which case those positions are removed from both profiles first. Zero
/// regions of `target` are charged via [`zero_intervals_cost`], removed, and
/// the remaining positions charged via [`nsp_and_costs`].
///
/// The metric is not symmetric once zeros are involved; callers building a
/// symmetric matrix should take `max(d(a, b), d(b, a))`.
///
/// ```
/// use cnp::libs::cnv::distance;
/// assert_eq!(distance(&[4, 4, 4], &[4, 0, 4], false).unwrap(), 4);
/// ```
pub fn distance(base: &[i32], target: &[i32], prune_base_zeros: bool) -> Result<i32, ProfileError> {
    if base.len() != target.len() {
        return Err(ProfileError::LengthMismatch {
            base: base.len(),
            target: target.len(),
        });
    }

    let base_zeros = zero_intervals(base);
    if !base_zeros.is_empty() && !prune_base_zeros {
        return Err(ProfileError::ForbiddenBaseZeros);
    }

    let (base, target) = if base_zeros.is_empty() {
        (base.to_vec(), target.to_vec())
    } else {
        remove_intervals(base, target, &base_zeros)
    };

    let target_zeros = zero_intervals(&target);
    let mut cost = zero_intervals_cost(&base, &target, &target_zeros);
    log::debug!(
        "zero intervals={:?} cost={}",
        target_zeros,
        cost
    );

    let (x, y) = remove_intervals(&base, &target, &target_zeros);

    let (_nsp, costs) = nsp_and_costs(&x, &y);
    cost += costs.iter().sum::<i32>();

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_intervals() {
        assert!(zero_intervals(&[]).is_empty());
        assert!(zero_intervals(&[1, 2, 3]).is_empty());
        assert_eq!(zero_intervals(&[0, 0, 0]), vec![(0, 2)]);
        assert_eq!(zero_intervals(&[0, 0, 3, 0, 4, 0]), vec![(0, 1), (3, 3), (5, 5)]);
        assert_eq!(zero_intervals(&[4, 0, 4]), vec![(1, 1)]);
    }

    #[test]
    fn test_zero_intervals_cost() {
        // Interior region, no boundary excess
        assert_eq!(zero_intervals_cost(&[4, 4, 4], &[4, 0, 4], &[(1, 1)]), 4);
        // Boundary excess absorbs part of the peak
        assert_eq!(zero_intervals_cost(&[4, 4, 4, 4], &[4, 0, 0, 4], &[(1, 2)]), 4);
        assert_eq!(zero_intervals_cost(&[2, 9, 9, 2], &[3, 0, 0, 1], &[(1, 2)]), 8);
        // Region touching the sequence edge has no neighbor on that side
        assert_eq!(zero_intervals_cost(&[5, 3], &[0, 3], &[(0, 0)]), 5);
    }

    #[test]
    fn test_remove_intervals() {
        let (x, y) = remove_intervals(
            &[1, 2, 3, 4, 5, 6],
            &[6, 5, 4, 3, 2, 1],
            &[(0, 1), (4, 4)],
        );
        assert_eq!(x, vec![3, 4, 6]);
        assert_eq!(y, vec![4, 3, 1]);

        // Interval order does not matter
        let (x2, y2) = remove_intervals(
            &[1, 2, 3, 4, 5, 6],
            &[6, 5, 4, 3, 2, 1],
            &[(4, 4), (0, 1)],
        );
        assert_eq!(x2, x);
        assert_eq!(y2, y);

        let (x, y) = remove_intervals(&[1, 2], &[3, 4], &[]);
        assert_eq!(x, vec![1, 2]);
        assert_eq!(y, vec![3, 4]);
    }

    #[test]
    fn test_nsp_donors() {
        // diff = [1, 2, 1]: the flanks donate to each other, the middle
        // position pays one extra event
        let (nsp, costs) = nsp_and_costs(&[5, 6, 5], &[4, 4, 4]);
        assert_eq!(nsp, vec![None, Some(2), Some(0)]);
        assert_eq!(costs, vec![1, 1, 0]);

        // Mixed signs: donors never cross a sign change
        let (nsp, costs) = nsp_and_costs(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]);
        assert_eq!(nsp, vec![Some(1), Some(2), None, None, Some(3)]);
        assert_eq!(costs, vec![2, 2, 0, 2, 2]);
    }

    #[test]
    fn test_nsp_tie_breaks_right() {
        // diff = [1, 2, 1]: position 1 has equal-cost donors on both sides;
        // the right one must win
        let (nsp, costs) = nsp_and_costs(&[5, 6, 5], &[4, 4, 4]);
        assert_eq!(nsp[1], Some(2));
        assert_eq!(costs[1], 1);

        // Alternating diffs: every position ties and resolves rightward
        let (nsp, costs) = nsp_and_costs(&[4, 2, 4, 2, 4], &[2, 4, 2, 4, 2]);
        assert_eq!(
            nsp,
            vec![Some(1), Some(2), Some(3), Some(4), None]
        );
        assert_eq!(costs, vec![2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_distance_identity() {
        assert_eq!(distance(&[4, 3, 5], &[4, 3, 5], false).unwrap(), 0);
        assert_eq!(distance(&[], &[], false).unwrap(), 0);
    }

    #[test]
    fn test_distance_single_step() {
        assert_eq!(distance(&[4], &[5], false).unwrap(), 1);
        assert_eq!(distance(&[4], &[3], false).unwrap(), 1);
    }

    #[test]
    fn test_distance_zero_region() {
        // Zero interval (1,1): peak 4, no boundary excess, then [4,4] vs [4,4]
        assert_eq!(distance(&[4, 4, 4], &[4, 0, 4], false).unwrap(), 4);
        assert_eq!(distance(&[5, 5, 5, 5], &[5, 0, 0, 5], false).unwrap(), 5);
    }

    #[test]
    fn test_distance_forbidden_base_zeros() {
        assert_eq!(
            distance(&[0, 4], &[4, 4], false),
            Err(ProfileError::ForbiddenBaseZeros)
        );
    }

    #[test]
    fn test_distance_base_pruning() {
        assert_eq!(distance(&[0, 4], &[4, 4], true).unwrap(), 0);
        assert_eq!(distance(&[3, 0, 0, 5, 2], &[2, 2, 2, 2, 2], true).unwrap(), 3);
        assert_eq!(distance(&[0, 0, 3, 3], &[2, 2, 3, 3], true).unwrap(), 0);
        // Base and target zeros overlapping
        assert_eq!(distance(&[4, 4, 0, 4, 4], &[4, 0, 0, 0, 4], true).unwrap(), 4);
    }

    #[test]
    fn test_distance_length_mismatch() {
        let err = ProfileError::LengthMismatch { base: 2, target: 3 };
        assert_eq!(distance(&[1, 2], &[1, 2, 3], false), Err(err.clone()));
        assert_eq!(distance(&[1, 2], &[1, 2, 3], true), Err(err));
    }

    #[test]
    fn test_distance_asymmetry_with_zeros() {
        // Deleting a region of the target is charged through its peak; the
        // reverse direction prunes the same region away for free
        let a = vec![3, 3, 3];
        let b = vec![3, 0, 3];
        assert_eq!(distance(&a, &b, true).unwrap(), 3);
        assert_eq!(distance(&b, &a, true).unwrap(), 0);
        assert_ne!(
            distance(&a, &b, true).unwrap(),
            distance(&b, &a, true).unwrap()
        );
    }

    #[test]
    fn test_distance_mixed_cases() {
        assert_eq!(distance(&[5, 6, 5], &[4, 4, 4], false).unwrap(), 2);
        assert_eq!(distance(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], false).unwrap(), 8);
        assert_eq!(distance(&[4, 2, 4, 2, 4], &[2, 4, 2, 4, 2], false).unwrap(), 10);
        assert_eq!(distance(&[6, 1, 3], &[2, 1, 5], false).unwrap(), 6);
    }

    #[test]
    fn test_distance_non_negative() {
        // Diff zeros surrounded by excess never yield negative costs
        assert_eq!(distance(&[5, 4, 5], &[4, 4, 4], false).unwrap(), 2);
        let (_, costs) = nsp_and_costs(&[5, 4, 5], &[4, 4, 4]);
        assert!(costs.iter().all(|&c| c >= 0));
    }
}
