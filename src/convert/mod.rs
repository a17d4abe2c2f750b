//! Conversion helpers between `Result`, `Option`, and [`Outcome`].
//!
//! These adapters make it straightforward to adopt outcome-rail incrementally:
//! wrap the `Result`s returned by existing code, and hand plain `Result`s back
//! when interacting with external APIs or the `?` operator.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! assert_eq!(outcome_to_result(outcome), Ok(42));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if result is `Ok`
/// * `Outcome::Failure(error)` if result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let err_result: Result<i32, &str> = Err("failed");
/// assert!(result_to_outcome(err_result).is_failure());
/// ```
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` to a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let failed = Outcome::<i32, &str>::failure("error");
/// assert_eq!(outcome_to_result(failed), Err("error"));
/// ```
#[inline]
pub fn outcome_to_result<V, E>(outcome: Outcome<V, E>) -> Result<V, E> {
    outcome.into_result()
}

/// Converts an `Option` to an `Outcome`, using `error` for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Error;
///
/// let found = option_to_outcome(Some(3), Error::new("ERR_404"));
/// assert_eq!(found.into_value(), Some(3));
///
/// let missing = option_to_outcome(None::<i32>, Error::new("ERR_404"));
/// assert_eq!(missing.into_error(), Some(Error::new("ERR_404")));
/// ```
#[inline]
pub fn option_to_outcome<V, E>(option: Option<V>, error: E) -> Outcome<V, E> {
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error),
    }
}

/// Converts an `Outcome` to an `Option`, discarding the error.
#[inline]
pub fn outcome_to_option<V, E>(outcome: Outcome<V, E>) -> Option<V> {
    outcome.into_value()
}

/// Flattens a nested `Outcome<Outcome<V, E>, E>` into `Outcome<V, E>`.
///
/// The outer failure wins when both levels could fail, since the inner outcome
/// only exists on the outer success track.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten_outcome;
/// use outcome_rail::Outcome;
///
/// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::success(1));
/// assert_eq!(flatten_outcome(nested).into_value(), Some(1));
///
/// let outer: Outcome<Outcome<i32, &str>, &str> = Outcome::failure("outer");
/// assert_eq!(flatten_outcome(outer).into_error(), Some("outer"));
/// ```
#[inline]
pub fn flatten_outcome<V, E>(outcome: Outcome<Outcome<V, E>, E>) -> Outcome<V, E> {
    outcome.flatten()
}
