//! # dyad
//!
//! Algebraic presence and fallibility containers for Rust.
//!
//! ## Overview
//!
//! This library provides two generic two-variant containers and a complete
//! combinator algebra over them, so that optionality and fallibility can be
//! expressed as ordinary values instead of null-like sentinels or escaped
//! exceptions:
//!
//! - [`Maybe`](maybe::Maybe): a box holding zero or one value (`Just` / `Nothing`)
//! - [`Outcome`](outcome::Outcome): a box holding a success or a failure value
//!   (`Success` / `Failure`)
//! - [`boundary`]: adapters that translate an external fallible or deferred
//!   computation into one of the containers
//!
//! Data flow is purely functional: construct a variant, thread it through
//! combinators that each return a (possibly new) container, and terminate the
//! chain with an extraction operation. No global state is involved.
//!
//! ## Feature Flags
//!
//! - `async`: asynchronous boundary adapters and the deferred-value
//!   `transpose` (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use dyad::maybe::Maybe;
//! use dyad::outcome::Outcome;
//!
//! let doubled = Maybe::Just(10)
//!     .map(|x| x * 2)
//!     .and_then(|x| if x > 15 { Maybe::Just(x) } else { Maybe::Nothing })
//!     .unwrap_or(0);
//! assert_eq!(doubled, 20);
//!
//! let report: Outcome<String, String> = Outcome::Success(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| {
//!         if x > 5 {
//!             Outcome::Success(x.to_string())
//!         } else {
//!             Outcome::Failure("too small".to_string())
//!         }
//!     })
//!     .map_err(|error| format!("Error: {error}"));
//! assert_eq!(report.unwrap_or("default".to_string()), "10");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use dyad::prelude::*;
/// ```
pub mod prelude {
    pub use crate::boundary::try_catch;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;

    #[cfg(feature = "async")]
    pub use crate::boundary::{maybe_from_future, outcome_from_future};
}

pub mod boundary;
pub mod maybe;
pub mod outcome;
