//! Property-based tests for the draw engine
//!
//! Uses proptest to verify the draw guarantees over randomly constructed
//! rosters. Solvable rosters are built by planting a random cycle and
//! never excluding its edges, so a valid assignment exists by
//! construction no matter what else gets excluded.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tombola::core::models::Participant;
use tombola::core::services::{DrawError, assign, verify_draw};

/// Build a roster that is solvable by construction
///
/// Participants are arranged in a random secret cycle, and exclusions are
/// sampled so they never hit the next participant in that cycle. The
/// cycle itself therefore remains a valid draw.
fn planted_roster(n: usize, seed: u64) -> Vec<Participant> {
    let mut rng = StdRng::seed_from_u64(seed);

    let ids: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);

    // next[i] = who participant i gives to in the planted cycle
    let mut next = vec![0usize; n];
    for (pos, &i) in order.iter().enumerate() {
        next[i] = order[(pos + 1) % n];
    }

    (0..n)
        .map(|i| {
            let budget = rng.gen_range(0..=n.saturating_sub(3));
            let mut exclusions = BTreeSet::new();
            for _ in 0..budget {
                let j = rng.gen_range(0..n);
                if j != i && j != next[i] {
                    exclusions.insert(ids[j].clone());
                }
            }
            Participant {
                id: ids[i].clone(),
                exclusions,
            }
        })
        .collect()
}

/// Build a roster with unconstrained random exclusion density
fn dense_roster(n: usize, seed: u64) -> Vec<Participant> {
    let mut rng = StdRng::seed_from_u64(seed);

    let ids: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();

    (0..n)
        .map(|i| {
            let mut exclusions = BTreeSet::new();
            for (j, id) in ids.iter().enumerate() {
                if j != i && rng.gen_bool(0.4) {
                    exclusions.insert(id.clone());
                }
            }
            Participant {
                id: ids[i].clone(),
                exclusions,
            }
        })
        .collect()
}

proptest! {
    /// Every solvable roster draws successfully and passes the verifier
    #[test]
    fn planted_rosters_draw_cleanly(n in 2usize..=8, seed in any::<u64>()) {
        let roster = planted_roster(n, seed);
        let draw = assign(&roster).unwrap();
        prop_assert!(verify_draw(&roster, &draw).is_empty());
    }

    /// Whatever the exclusion density, a successful draw passes the verifier
    #[test]
    fn successful_draws_always_verify(n in 2usize..=7, seed in any::<u64>()) {
        let roster = dense_roster(n, seed);
        match assign(&roster) {
            Ok(draw) => prop_assert!(verify_draw(&roster, &draw).is_empty()),
            Err(DrawError::UnsatisfiableConstraints) => {},
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    /// A participant excluding everyone else can never draw anyone
    #[test]
    fn blanket_exclusion_is_unsatisfiable(n in 3usize..=7) {
        let ids: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
        let mut roster = vec![Participant::with_exclusions("p0", ids[1..].iter().cloned())];
        roster.extend(ids[1..].iter().map(|id| Participant::new(id.clone())));
        prop_assert_eq!(assign(&roster), Err(DrawError::UnsatisfiableConstraints));
    }

    /// The engine is deterministic for identical input
    #[test]
    fn draw_is_deterministic(n in 2usize..=8, seed in any::<u64>()) {
        let roster = planted_roster(n, seed);
        prop_assert_eq!(assign(&roster), assign(&roster));
    }
}
