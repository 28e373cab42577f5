//! Boundary adapters - converting external computations into containers.
//!
//! The containers themselves are pure values; this module sits at the edge
//! where a failure-prone or deferred computation from the outside world is
//! translated into a container:
//!
//! - [`try_catch`]: runs a fallible computation immediately and captures its
//!   result as an [`Outcome`]
//! - [`outcome_from_future`]: awaits a deferred fallible computation,
//!   keeping the rejection payload (`async` feature)
//! - [`maybe_from_future`]: awaits a deferred fallible computation,
//!   discarding the rejection payload entirely (`async` feature)
//!
//! Each asynchronous adapter suspends exactly once, at the point where it
//! awaits the supplied future, and holds no state besides that future. No
//! cancellation surface is defined; once awaited, the suspension runs to
//! settlement.
//!
//! # Examples
//!
//! ```rust
//! use dyad::boundary::try_catch;
//! use dyad::outcome::Outcome;
//!
//! let parsed = try_catch(|| "42".parse::<i32>());
//! assert_eq!(parsed, Outcome::Success(42));
//!
//! let failed = try_catch(|| "not a number".parse::<i32>());
//! assert!(failed.is_failure());
//! ```

#[cfg(feature = "async")]
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Invokes a fallible computation immediately and captures its result.
///
/// A normal return wraps the value in `Success`; a returned error wraps the
/// error in `Failure`. Panics are programmer-error faults, not represented
/// failures, and are not caught.
///
/// # Examples
///
/// ```rust
/// use dyad::boundary::try_catch;
/// use dyad::outcome::Outcome;
///
/// let parsed = try_catch(|| "42".parse::<i32>());
/// assert_eq!(parsed, Outcome::Success(42));
/// ```
#[inline]
pub fn try_catch<T, E, F>(computation: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Outcome::from(computation())
}

/// Awaits a deferred fallible computation and captures its settlement.
///
/// Suspends exactly once. Fulfillment produces `Success`; rejection
/// produces `Failure` carrying the rejection payload.
///
/// # Examples
///
/// ```rust
/// use dyad::boundary::outcome_from_future;
/// use dyad::outcome::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fulfilled = outcome_from_future(async { Ok::<_, String>(42) }).await;
/// assert_eq!(fulfilled, Outcome::Success(42));
///
/// let rejected = outcome_from_future(async { Err::<i32, _>("x".to_string()) }).await;
/// assert_eq!(rejected, Outcome::Failure("x".to_string()));
/// # }
/// ```
#[cfg(feature = "async")]
#[inline]
pub async fn outcome_from_future<T, E, F>(future: F) -> Outcome<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    Outcome::from(future.await)
}

/// Awaits a deferred fallible computation, keeping only presence.
///
/// Suspends exactly once. Fulfillment produces `Just`; rejection produces
/// `Nothing`, discarding the rejection payload entirely — the presence
/// container has no slot for an error payload.
///
/// # Examples
///
/// ```rust
/// use dyad::boundary::maybe_from_future;
/// use dyad::maybe::Maybe;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fulfilled = maybe_from_future(async { Ok::<_, String>(42) }).await;
/// assert_eq!(fulfilled, Maybe::Just(42));
///
/// let rejected = maybe_from_future(async { Err::<i32, _>("x".to_string()) }).await;
/// assert_eq!(rejected, Maybe::Nothing);
/// # }
/// ```
#[cfg(feature = "async")]
#[inline]
pub async fn maybe_from_future<T, E, F>(future: F) -> Maybe<T>
where
    F: Future<Output = Result<T, E>>,
{
    match future.await {
        Ok(value) => Maybe::Just(value),
        Err(_) => Maybe::Nothing,
    }
}
