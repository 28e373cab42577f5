//! Property-based tests for Functor laws.
//!
//! This module verifies that the `map` operations on both containers
//! satisfy the required laws:
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//!
//! Using proptest, we generate random inputs to thoroughly verify these
//! laws across a wide range of values.

use dyad::maybe::Maybe;
use dyad::outcome::Outcome;
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(Maybe::Just), Just(Maybe::Nothing)]
}

fn arb_maybe_string() -> impl Strategy<Value = Maybe<String>> {
    prop_oneof![
        "[a-z]{0,10}".prop_map(Maybe::Just),
        Just(Maybe::Nothing),
    ]
}

fn arb_outcome_i32() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Success),
        "[a-z]{1,10}".prop_map(Outcome::Failure),
    ]
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Maybe<i32>: map with identity returns the original value
    #[test]
    fn prop_maybe_identity_law(value in arb_maybe_i32()) {
        let result = value.map(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Maybe<i32>: mapping composed functions equals composing maps
    #[test]
    fn prop_maybe_composition_law(value in arb_maybe_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for Maybe<String>
    #[test]
    fn prop_maybe_string_identity_law(value in arb_maybe_string()) {
        let result = value.clone().map(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Maybe<String>: mapping length then doubling
    #[test]
    fn prop_maybe_string_composition_law(value in arb_maybe_string()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// map_or is coherent with map followed by unwrap_or
    #[test]
    fn prop_maybe_map_or_coherence(value in arb_maybe_i32(), default in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        let left = value.map_or(default, function);
        let right = value.map(function).unwrap_or(default);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Outcome<T, E> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Outcome<i32, String>
    #[test]
    fn prop_outcome_identity_law(value in arb_outcome_i32()) {
        let result = value.clone().map(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Outcome<i32, String>
    #[test]
    fn prop_outcome_composition_law(value in arb_outcome_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for map_err over the failure payload
    #[test]
    fn prop_outcome_map_err_identity_law(value in arb_outcome_i32()) {
        let result = value.clone().map_err(|e| e);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for map_err over the failure payload
    #[test]
    fn prop_outcome_map_err_composition_law(value in arb_outcome_i32()) {
        let function1 = |e: String| e.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().map_err(function1).map_err(function2);
        let right = value.map_err(|e| function2(function1(e)));

        prop_assert_eq!(left, right);
    }

    /// map and map_err act on disjoint payloads and therefore commute
    #[test]
    fn prop_outcome_map_map_err_commute(value in arb_outcome_i32()) {
        let success_function = |n: i32| n.wrapping_add(1);
        let failure_function = |e: String| e.len();

        let left = value.clone().map(success_function).map_err(failure_function);
        let right = value.map_err(failure_function).map(success_function);

        prop_assert_eq!(left, right);
    }
}
