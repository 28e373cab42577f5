//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, which represents a box holding
//! zero or one value: either `Just(T)` or `Nothing`. This is commonly used
//! in functional programming for:
//!
//! - Expressing optionality without null-like sentinels
//! - Chaining lookups that may not produce a value
//! - Carrying the present half of a projection from [`Outcome`](crate::outcome::Outcome)
//!
//! The payload lives in an owned, replaceable slot, so the mutation
//! operations (`take`, `take_if`, `replace`) are plain local operations on
//! `&mut self` with no internal suspension points.
//!
//! # Examples
//!
//! ```rust
//! use dyad::maybe::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::Just(42);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Just(n) => println!("Got value: {}", n),
//!     Maybe::Nothing => println!("Got nothing"),
//! }
//!
//! // Chaining combinators
//! let result = Maybe::Just(10)
//!     .map(|x| x * 2)
//!     .and_then(|x| if x > 15 { Maybe::Just(x) } else { Maybe::Nothing })
//!     .unwrap_or(0);
//! assert_eq!(result, 20);
//! ```

use std::fmt;
use std::mem;

/// A value that may or may not be present.
///
/// `Maybe<T>` represents a box that is either `Just(value)` or `Nothing`.
/// Exactly one variant is active at any time; `Nothing` carries no payload.
///
/// Equality is structural: two containers are equal when they hold the same
/// variant and (for `Just`) equal payloads.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use dyad::maybe::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(42);
/// let doubled = present.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Just(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The occupied variant, holding a value.
    Just(T),
    /// The empty variant, holding no payload.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(present.is_just());
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(!absent.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(absent.is_nothing());
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(!present.is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` if this is a `Just` value and the predicate holds for
    /// the contained value.
    ///
    /// The predicate is only invoked when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(present.is_just_and(|x| x > 40));
    /// assert!(!Maybe::Just(10).is_just_and(|x| x > 40));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(!absent.is_just_and(|x| x > 40));
    /// ```
    #[inline]
    pub fn is_just_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Just(value) => predicate(value),
            Self::Nothing => false,
        }
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<String> = Maybe::Just("hello".to_string());
    /// let length = present.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Just(5));
    /// // `present` is still usable here
    /// assert!(present.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let mut present: Maybe<i32> = Maybe::Just(2);
    /// if let Maybe::Just(value) = present.as_mut() {
    ///     *value = 42;
    /// }
    /// assert_eq!(present, Maybe::Just(42));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Just(value)`, returns `Just(function(value))`.
    /// If this is `Nothing`, returns `Nothing` and the function is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(21);
    /// assert_eq!(present.map(|x| x * 2), Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a function to the contained value if present, or returns the
    /// provided default.
    ///
    /// This collapses the container directly to a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<&str> = Maybe::Just("hello");
    /// assert_eq!(present.map_or(0, |s| s.len()), 5);
    ///
    /// let absent: Maybe<&str> = Maybe::Nothing;
    /// assert_eq!(absent.map_or(0, |s| s.len()), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    // =========================================================================
    // Combination Operations
    // =========================================================================

    /// Returns `other` if this is `Just`, otherwise `Nothing`.
    ///
    /// The contained value of the receiver is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let first: Maybe<i32> = Maybe::Just(1);
    /// let second: Maybe<&str> = Maybe::Just("two");
    /// assert_eq!(first.and(second), Maybe::Just("two"));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.and(second), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Just(_) => other,
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `function(value)` if this is `Just(value)`, otherwise
    /// `Nothing`.
    ///
    /// The function itself returns a `Maybe`, which enables chaining
    /// lookups that may not produce a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// fn checked_halve(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::Just(8).and_then(checked_halve), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(7).and_then(checked_halve), Maybe::Nothing);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.and_then(checked_halve), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the receiver if it is `Just`, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(1);
    /// assert_eq!(present.or(Maybe::Just(2)), Maybe::Just(1));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.or(Maybe::Just(2)), Maybe::Just(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => other,
        }
    }

    /// Returns the receiver if it is `Just`, otherwise calls `function` and
    /// returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(1);
    /// assert_eq!(present.or_else(|| Maybe::Just(2)), Maybe::Just(1));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.or_else(|| Maybe::Just(2)), Maybe::Just(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => function(),
        }
    }

    /// Returns whichever of the two containers is `Just` when exactly one
    /// of them is, otherwise `Nothing`.
    ///
    /// Truth table:
    ///
    /// | receiver  | other     | result    |
    /// |-----------|-----------|-----------|
    /// | `Just`    | `Just`    | `Nothing` |
    /// | `Just`    | `Nothing` | receiver  |
    /// | `Nothing` | `Just`    | other     |
    /// | `Nothing` | `Nothing` | `Nothing` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(Maybe::Just(1).xor(absent), Maybe::Just(1));
    /// assert_eq!(absent.xor(Maybe::Just(2)), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(1).xor(Maybe::Just(2)), Maybe::Nothing);
    /// assert_eq!(absent.xor(absent), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Extraction Operations
    // =========================================================================

    /// Returns the contained value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics with the supplied message if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.expect("value should be present"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    /// Returns the contained value or the provided default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_or(0), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from the given function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_or_else(|| 0), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.unwrap_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Mutation Operations
    // =========================================================================

    /// Takes the value out of the container, leaving `Nothing` in its place.
    ///
    /// Returns the removed payload wrapped in `Just`, or `Nothing` if the
    /// container was already empty. The call contains no suspension point,
    /// so it is atomic with respect to a cooperative scheduler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let mut slot: Maybe<i32> = Maybe::Just(5);
    /// let taken = slot.take();
    /// assert_eq!(taken, Maybe::Just(5));
    /// assert!(slot.is_nothing());
    ///
    /// let mut empty: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(empty.take(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::Nothing)
    }

    /// Takes the value out of the container, but only if the predicate holds
    /// for the current payload.
    ///
    /// When the predicate returns `false`, or the container is already
    /// empty, the receiver is left untouched and `Nothing` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let mut slot: Maybe<i32> = Maybe::Just(42);
    ///
    /// assert_eq!(slot.take_if(|x| *x < 40), Maybe::Nothing);
    /// assert_eq!(slot, Maybe::Just(42));
    ///
    /// assert_eq!(slot.take_if(|x| *x > 40), Maybe::Just(42));
    /// assert!(slot.is_nothing());
    /// ```
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Self
    where
        P: FnOnce(&mut T) -> bool,
    {
        if self.as_mut().map_or(false, predicate) {
            self.take()
        } else {
            Self::Nothing
        }
    }

    /// Stores `value` in the container's slot and returns the value that was
    /// previously held, wrapped in `Just`.
    ///
    /// An empty receiver has no slot to mutate: it is left untouched, and
    /// the supplied value itself is returned wrapped in `Just`. Thus
    /// `Nothing.replace(10)` produces `Just(10)` without converting the
    /// receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let mut slot: Maybe<i32> = Maybe::Just(1);
    /// let previous = slot.replace(2);
    /// assert_eq!(previous, Maybe::Just(1));
    /// assert_eq!(slot, Maybe::Just(2));
    ///
    /// let mut empty: Maybe<i32> = Maybe::Nothing;
    /// let produced = empty.replace(10);
    /// assert_eq!(produced, Maybe::Just(10));
    /// assert!(empty.is_nothing());
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        match self {
            Self::Just(slot) => Self::Just(mem::replace(slot, value)),
            Self::Nothing => Self::Just(value),
        }
    }

    // =========================================================================
    // Independent Combination
    // =========================================================================

    /// Zips two containers into a container of a pair.
    ///
    /// Returns `Just((first, second))` when both containers are `Just`,
    /// otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let number: Maybe<i32> = Maybe::Just(1);
    /// let word: Maybe<&str> = Maybe::Just("one");
    /// assert_eq!(number.zip(word), Maybe::Just((1, "one")));
    ///
    /// let absent: Maybe<&str> = Maybe::Nothing;
    /// assert_eq!(number.zip(absent), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just((first, second)),
            _ => Maybe::Nothing,
        }
    }

    /// Zips two containers with a combining function.
    ///
    /// Returns `Just(function(first, second))` when both containers are
    /// `Just`, otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let first: Maybe<i32> = Maybe::Just(17);
    /// let second: Maybe<i32> = Maybe::Just(25);
    /// assert_eq!(first.zip_with(second, |a, b| a + b), Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(first.zip_with(absent, |a, b| a + b), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, function: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Returns the receiver unchanged if it is `Just` and the predicate
    /// holds for the contained value, otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(4).filter(|x| x % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(3).filter(|x| x % 2 == 0), Maybe::Nothing);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.filter(|x| x % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Just(value) = self {
            if predicate(&value) {
                return Self::Just(value);
            }
        }
        Self::Nothing
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts a host-level nullable value into a `Maybe`.
    ///
    /// `None` maps to `Nothing`; any other value maps to `Just`, including
    /// values such as `0` or an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(0)), Maybe::Just(0));
    /// assert_eq!(Maybe::from_option(None::<i32>), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Converts the `Maybe` into a standard `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).into_option(), Some(42));
    /// assert_eq!(Maybe::Nothing::<i32>.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Maybe<T> {
    /// Returns the contained value or the type's default value.
    ///
    /// The "zero value" of the payload type is whatever its `Default`
    /// implementation produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_or_default(), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => T::default(),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// `Just(Just(value))` becomes `Just(value)`; `Just(Nothing)` and
    /// `Nothing` become `Nothing`. Only one level is removed per call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::maybe::Maybe;
    ///
    /// let nested: Maybe<Maybe<i32>> = Maybe::Just(Maybe::Just(42));
    /// assert_eq!(nested.flatten(), Maybe::Just(42));
    ///
    /// let hollow: Maybe<Maybe<i32>> = Maybe::Just(Maybe::Nothing);
    /// assert_eq!(hollow.flatten(), Maybe::Nothing);
    ///
    /// let twice: Maybe<Maybe<Maybe<i32>>> = Maybe::Just(Maybe::Just(Maybe::Just(42)));
    /// assert_eq!(twice.flatten(), Maybe::Just(Maybe::Just(42)));
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Nothing`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(value)` becomes `Just(value)`, and `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Just(value)` becomes `Some(value)`, and `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Auto-trait Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
