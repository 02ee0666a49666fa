//! Random evolution of copy-number profiles along tree branches.

use rand::Rng;

/// Parameters for branch-wise profile evolution.
#[derive(Debug, Clone, Copy)]
pub struct EventModel {
    /// Maximum number of events on a single branch (inclusive)
    pub max_events: u32,
    /// Probability that an event is a deletion rather than an amplification
    pub prob_deletion: f64,
}

/// Draw a root profile: each position is `start` plus a uniform delta in
/// `[-max_delta, max_delta]`, clamped to at least 1.
pub fn random_root_profile(
    length: usize,
    start: i32,
    max_delta: i32,
    rng: &mut impl Rng,
) -> Vec<i32> {
    (0..length)
        .map(|_| {
            let delta = rng.gen_range(-max_delta..=max_delta);
            (start + delta).max(1)
        })
        .collect()
}

/// Apply a random number of amplification/deletion events to a copy of
/// `parent`.
///
/// Each event picks a random segment range `[s, t]` with `s < t` and shifts
/// every position in it by one, except positions already at zero: a complete
/// loss is never resurrected and never goes negative.
pub fn evolve(parent: &[i32], model: &EventModel, rng: &mut impl Rng) -> Vec<i32> {
    let n = parent.len();
    let mut profile = parent.to_vec();
    if n < 2 {
        return profile;
    }

    let nb_events = rng.gen_range(0..=model.max_events);
    for _ in 0..nb_events {
        let b = if rng.gen::<f64>() <= model.prob_deletion {
            -1
        } else {
            1
        };

        // Uniform ordered pair s < t
        let mut s = rng.gen_range(0..n);
        let mut t = rng.gen_range(0..n - 1);
        if t >= s {
            t += 1;
        } else {
            std::mem::swap(&mut s, &mut t);
        }

        for v in &mut profile[s..=t] {
            if *v > 0 {
                *v += b;
            }
        }
    }

    profile
}
