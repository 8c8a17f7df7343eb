use bayes_search::{
    revise, SearchState, AreaBounds, DEFAULT_PRIORS, MAX_EFFECTIVENESS, MIN_EFFECTIVENESS,
    NUM_AREAS, SEARCH_AREAS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;

/// Three non-negative weights normalised into priors.
fn priors_strategy() -> impl Strategy<Value = [f64; NUM_AREAS]> {
    (0.01f64..1.0, 0.01f64..1.0, 0.01f64..1.0).prop_map(|(a, b, c)| {
        let total = a + b + c;
        [a / total, b / total, c / total]
    })
}

/// Priors with one or two areas at exactly zero.
fn zero_priors_strategy() -> impl Strategy<Value = [f64; NUM_AREAS]> {
    prop_oneof![
        Just([1.0, 0.0, 0.0]),
        Just([0.0, 1.0, 0.0]),
        Just([0.0, 0.0, 1.0]),
        Just([0.0, 0.5, 0.5]),
        Just([0.5, 0.0, 0.5]),
        Just([0.25, 0.75, 0.0]),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn zero_priors_stay_zero_and_normalised(
        seed in any::<u64>(),
        priors in zero_priors_strategy(),
        rounds in 1usize..60,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = SearchState::new(&SEARCH_AREAS, &priors).unwrap();
        state.place_target(&mut rng, NUM_AREAS).unwrap();
        for _ in 0..rounds {
            state.draw_search_effectiveness(&mut rng).unwrap();
            let revised = state.revise_priors().unwrap();
            prop_assert!((revised.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            for i in 0..NUM_AREAS {
                if priors[i] == 0.0 {
                    prop_assert_eq!(revised[i], 0.0);
                } else {
                    prop_assert!(revised[i] > 0.0);
                }
            }
        }
    }

    #[test]
    fn priors_stay_normalised_over_rounds(
        seed in any::<u64>(),
        priors in priors_strategy(),
        rounds in 1usize..60,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = SearchState::new(&SEARCH_AREAS, &priors).unwrap();
        state.place_target(&mut rng, NUM_AREAS).unwrap();
        for _ in 0..rounds {
            let eff = state.draw_search_effectiveness(&mut rng).unwrap();
            for e in eff {
                prop_assert!((MIN_EFFECTIVENESS..=MAX_EFFECTIVENESS).contains(&e));
            }
            let revised = state.revise_priors().unwrap();
            prop_assert!((revised.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            prop_assert!(revised.iter().all(|p| (0.0..=1.0).contains(p)));
        }
    }

    #[test]
    fn revision_matches_bayes_rule(
        priors in priors_strategy(),
        e1 in 0.0f64..0.99,
        e2 in 0.0f64..0.99,
        e3 in 0.0f64..0.99,
    ) {
        let eff = [e1, e2, e3];
        let revised = revise(&priors, &eff).unwrap();
        let denom: f64 = (0..NUM_AREAS).map(|i| priors[i] * (1.0 - eff[i])).sum();
        for i in 0..NUM_AREAS {
            prop_assert!((revised[i] - priors[i] * (1.0 - eff[i]) / denom).abs() < 1e-12);
        }
    }

    #[test]
    fn placement_stays_in_bounds(seed in any::<u64>(), num_areas in 1usize..=NUM_AREAS) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = SearchState::new(&SEARCH_AREAS, &DEFAULT_PRIORS).unwrap();
        let target = state.place_target(&mut rng, num_areas).unwrap();
        prop_assert!((1..=num_areas).contains(&target.area));
        prop_assert!(SEARCH_AREAS[0].contains(target.local));
    }

    #[test]
    fn searched_cells_are_distinct_and_sized(
        seed in any::<u64>(),
        width in 1usize..40,
        height in 1usize..40,
        effectiveness in 0.0f64..=1.0,
    ) {
        let grid = AreaBounds::grid(width, height);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = SearchState::new(&[grid, grid, grid], &DEFAULT_PRIORS).unwrap();
        state.place_target(&mut rng, NUM_AREAS).unwrap();
        state.set_search_effectiveness([effectiveness; NUM_AREAS]).unwrap();
        let outcome = state.conduct_search(&mut rng, 2).unwrap();
        let expected = ((width * height) as f64 * effectiveness) as usize;
        prop_assert_eq!(outcome.searched_cells.len(), expected);
        let unique: HashSet<_> = outcome.searched_cells.iter().copied().collect();
        prop_assert_eq!(unique.len(), expected);
        prop_assert!(outcome.searched_cells.iter().all(|&c| grid.contains(c)));
    }

    #[test]
    fn full_coverage_finds_and_empty_coverage_misses(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = SearchState::new(&SEARCH_AREAS, &DEFAULT_PRIORS).unwrap();
        let target = state.place_target(&mut rng, NUM_AREAS).unwrap();

        state.set_search_effectiveness([1.0; NUM_AREAS]).unwrap();
        prop_assert!(state.conduct_search(&mut rng, target.area).unwrap().found);

        state.set_search_effectiveness([0.0; NUM_AREAS]).unwrap();
        for area in 1..=NUM_AREAS {
            let outcome = state.conduct_search(&mut rng, area).unwrap();
            prop_assert!(!outcome.found);
            prop_assert!(outcome.searched_cells.is_empty());
        }
    }
}
