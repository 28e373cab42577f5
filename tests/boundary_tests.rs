//! Unit tests for the boundary adapters.
//!
//! The adapters translate external fallible or deferred computations into
//! container values:
//! - `try_catch`: immediate invocation, result captured as an Outcome
//! - `outcome_from_future`: deferred computation, rejection payload kept
//! - `maybe_from_future`: deferred computation, rejection payload discarded

use dyad::boundary::try_catch;
use dyad::outcome::Outcome;
use rstest::rstest;

// =============================================================================
// Synchronous Adapter
// =============================================================================

#[rstest]
fn try_catch_wraps_normal_return_in_success() {
    let parsed = try_catch(|| "42".parse::<i32>());
    assert_eq!(parsed, Outcome::Success(42));
}

#[rstest]
fn try_catch_wraps_fault_in_failure() {
    let parsed = try_catch(|| "not a number".parse::<i32>());
    assert!(parsed.is_failure());
}

#[rstest]
fn try_catch_invokes_computation_immediately() {
    let mut invoked = false;
    let _ = try_catch::<i32, String, _>(|| {
        invoked = true;
        Ok(1)
    });
    assert!(invoked);
}

#[rstest]
fn try_catch_failure_payload_is_ordinary_data() {
    let outcome: Outcome<i32, String> = try_catch(|| Err("boom".to_string()));
    assert_eq!(outcome.unwrap_err(), "boom");
}

// =============================================================================
// Asynchronous Adapters
// =============================================================================

#[cfg(feature = "async")]
mod deferred {
    use super::*;
    use dyad::boundary::{maybe_from_future, outcome_from_future};
    use dyad::maybe::Maybe;
    use std::future;

    #[rstest]
    #[tokio::test]
    async fn outcome_from_future_fulfillment_produces_success() {
        let outcome = outcome_from_future(future::ready(Ok::<_, String>(42))).await;
        assert_eq!(outcome, Outcome::Success(42));
    }

    #[rstest]
    #[tokio::test]
    async fn outcome_from_future_rejection_carries_reason() {
        let outcome =
            outcome_from_future(future::ready(Err::<i32, _>("x".to_string()))).await;
        assert_eq!(outcome, Outcome::Failure("x".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn outcome_from_future_suspends_until_settlement() {
        let outcome = outcome_from_future(async {
            tokio::task::yield_now().await;
            Ok::<_, String>(42)
        })
        .await;
        assert_eq!(outcome, Outcome::Success(42));
    }

    #[rstest]
    #[tokio::test]
    async fn maybe_from_future_fulfillment_produces_just() {
        let maybe = maybe_from_future(future::ready(Ok::<_, String>(42))).await;
        assert_eq!(maybe, Maybe::Just(42));
    }

    #[rstest]
    #[tokio::test]
    async fn maybe_from_future_rejection_discards_reason() {
        let maybe = maybe_from_future(future::ready(Err::<i32, _>("x".to_string()))).await;
        assert_eq!(maybe, Maybe::Nothing);
    }
}
