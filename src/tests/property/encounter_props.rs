//! Property-based tests for the encounter state store
//!
//! Tests invariants:
//! - Initiative rolls are in [1, die]
//! - Initiative order is sorted non-increasing
//! - NEW_ONLY rolls preserve existing values
//! - Conditions expire exactly after their duration
//! - Duplicate names are rejected under any casing

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::encounter::{canonical_name, EncounterOptions, EncounterState, RollScope};
use crate::core::error::EncounterError;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Distinct participant names (distinct after canonicalisation too).
fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..12)
        .prop_map(|set| set.into_iter().collect())
}

/// A name with randomised letter casing.
fn arb_recased(name: String) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

fn populated(names: &[String]) -> EncounterState {
    let mut state = EncounterState::new();
    for (i, name) in names.iter().enumerate() {
        state.add_participant(name, 10 + i as i32, 12).unwrap();
    }
    state
}

// ============================================================================
// Initiative
// ============================================================================

proptest! {
    #[test]
    fn prop_roll_all_within_die(names in arb_names(), seed in any::<u64>(), die in 1u32..=100) {
        let mut state = EncounterState::with_options(EncounterOptions {
            initiative_die: die,
            ..EncounterOptions::default()
        });
        for name in &names {
            state.add_participant(name, 1, 1).unwrap();
        }
        state.roll_initiative(RollScope::All, &mut StdRng::seed_from_u64(seed));

        for participant in state.participants() {
            let value = participant.initiative.unwrap();
            prop_assert!((1..=die).contains(&value));
        }
    }

    #[test]
    fn prop_order_sorted_and_complete(names in arb_names(), seed in any::<u64>()) {
        let mut state = populated(&names);
        state.roll_initiative(RollScope::All, &mut StdRng::seed_from_u64(seed));

        let order = state.initiative_order();
        prop_assert_eq!(order.len(), names.len());
        prop_assert!(order.windows(2).all(|w| w[0].1 >= w[1].1));
        for (name, value) in &order {
            prop_assert_eq!(state.participant(name).unwrap().initiative, Some(*value));
        }
    }

    #[test]
    fn prop_new_only_preserves_existing(
        first in arb_names(),
        later in arb_names(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = populated(&first);
        state.roll_initiative(RollScope::All, &mut rng);
        let before: Vec<(String, Option<u32>)> = state
            .participants()
            .map(|p| (p.name.clone(), p.initiative))
            .collect();

        for name in &later {
            // Overlapping names are rejected and keep their roll.
            let _ = state.add_participant(name, 1, 1);
        }
        state.roll_initiative(RollScope::NewOnly, &mut rng);

        for (name, initiative) in before {
            prop_assert_eq!(state.participant(&name).unwrap().initiative, initiative);
        }
        prop_assert!(state.participants().all(|p| p.initiative.is_some()));
    }

    #[test]
    fn prop_order_excludes_unrolled(names in arb_names(), extra in "[A-Z]{9,12}", seed in any::<u64>()) {
        let mut state = populated(&names);
        state.roll_initiative(RollScope::All, &mut StdRng::seed_from_u64(seed));
        state.add_participant(&extra, 1, 1).unwrap();

        let key = canonical_name(&extra);
        prop_assert!(state.initiative_order().iter().all(|(name, _)| *name != key));
    }
}

// ============================================================================
// Conditions
// ============================================================================

proptest! {
    #[test]
    fn prop_condition_expires_after_duration(duration in 1i64..50, target in "[a-z]{1,8}") {
        let mut state = EncounterState::new();
        state.apply_condition("Poisoned", "1d4", duration, &target).unwrap();

        for _ in 1..duration {
            state.advance_conditions();
        }
        let remaining: Vec<u32> = state
            .conditions_for(&target)
            .iter()
            .map(|c| c.remaining_turns)
            .collect();
        prop_assert_eq!(remaining, vec![1]);

        state.advance_conditions();
        prop_assert!(state.conditions_for(&target).is_empty());
        prop_assert!(state.has_condition_entry(&target));
    }

    #[test]
    fn prop_counters_stay_positive(
        durations in prop::collection::vec(1i64..10, 1..8),
        advances in 0usize..12,
    ) {
        let mut state = EncounterState::new();
        for (i, d) in durations.iter().enumerate() {
            state.apply_condition(&format!("c{i}"), "effect", *d, "Aria").unwrap();
        }
        for _ in 0..advances {
            state.advance_conditions();
        }

        let survivors = state.conditions_for("Aria");
        prop_assert!(survivors.iter().all(|c| c.remaining_turns > 0));
        let expected = durations.iter().filter(|&&d| d as usize > advances).count();
        prop_assert_eq!(survivors.len(), expected);
    }

    #[test]
    fn prop_non_positive_duration_rejected(duration in -100i64..=0) {
        let mut state = EncounterState::new();
        let result = state.apply_condition("Stunned", "none", duration, "Aria");
        prop_assert_eq!(result, Err(EncounterError::InvalidDuration));
        prop_assert!(!state.has_condition_entry("Aria"));
    }
}

// ============================================================================
// Names
// ============================================================================

proptest! {
    #[test]
    fn prop_duplicate_rejected_any_case(
        (name, recased) in "[a-z]{1,10}".prop_flat_map(|n| (Just(n.clone()), arb_recased(n)))
    ) {
        let mut state = EncounterState::new();
        state.add_participant(&name, 10, 15).unwrap();

        let result = state.add_participant(&recased, 5, 5);
        prop_assert_eq!(result, Err(EncounterError::DuplicateName(canonical_name(&name))));
        prop_assert_eq!(state.len(), 1);
        let kept = state.participant(&name).unwrap();
        prop_assert_eq!((kept.health, kept.armor_class), (10, 15));
    }
}
