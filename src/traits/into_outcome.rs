//! Extension traits for moving `Result` and `Option` values onto the rails.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//! use outcome_rail::{Error, Outcome};
//!
//! let parsed: Outcome<u8, _> = "42".parse::<u8>().into_outcome();
//! assert_eq!(parsed.into_value(), Some(42));
//!
//! let missing: Outcome<&str> = None.ok_or_failure(Error::new("ERR_404"));
//! assert!(missing.is_failure());
//! ```

use crate::outcome::Outcome;

/// Extension trait converting a `Result` into an [`Outcome`].
///
/// `Ok` lands on the success track and `Err` on the failure track, so a
/// `Result`-returning function can be used as a step in an `on_success` chain:
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
/// use outcome_rail::Outcome;
///
/// let out = Outcome::<&str, core::num::ParseIntError>::success("12")
///     .on_success(|s| s.parse::<i64>().into_outcome())
///     .map(|n| n * 2);
/// assert_eq!(out.into_value(), Some(24));
/// ```
pub trait IntoOutcome<V, E> {
    /// Converts `self` into an `Outcome`.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from_result(self)
    }
}

/// Extension trait turning an `Option` into an [`Outcome`].
pub trait OptionOutcomeExt<V> {
    /// Maps `Some(v)` to success and `None` to a failure with `error`.
    fn ok_or_failure<E>(self, error: E) -> Outcome<V, E>;

    /// Like [`ok_or_failure`](OptionOutcomeExt::ok_or_failure), but only
    /// builds the error when the option is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OptionOutcomeExt;
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let mut built = false;
    /// let out: Outcome<i32> = Some(1).ok_or_failure_with(|| {
    ///     built = true;
    ///     Error::new("ERR_404")
    /// });
    /// assert!(out.is_success());
    /// assert!(!built);
    /// ```
    fn ok_or_failure_with<E, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce() -> E;
}

impl<V> OptionOutcomeExt<V> for Option<V> {
    #[inline]
    fn ok_or_failure<E>(self, error: E) -> Outcome<V, E> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error),
        }
    }

    #[inline]
    fn ok_or_failure_with<E, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(f()),
        }
    }
}
