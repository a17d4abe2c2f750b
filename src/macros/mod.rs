//! Ergonomic macros for building errors and propagating failures.
//!
//! These macros replace the implicit value/error conversions other languages
//! offer at return sites:
//!
//! - [`macro@crate::error`] - Builds an [`Error`](crate::Error) from a code and an optional
//!   `format!`-style message.
//! - [`macro@crate::fail`] - Same arguments, wrapped on the failure track.
//! - [`macro@crate::ensure`] - Returns early with a failure when a condition does not hold.
//! - [`macro@crate::rail`] - Unwraps a success value or returns early with the failure,
//!   the `?` operator for [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, fail, rail, success, Error, Outcome};
//!
//! fn parse_age(input: &str) -> Outcome<u8> {
//!     match input.parse::<u8>() {
//!         Ok(age) => success(age),
//!         Err(err) => fail!("AGE_001", "not a number: {}", err),
//!     }
//! }
//!
//! fn adult(input: &str) -> Outcome<u8> {
//!     let age = rail!(parse_age(input));
//!     ensure!(age >= 18, "AGE_002", "{} is under 18", age);
//!     success(age)
//! }
//!
//! assert_eq!(adult("42").into_value(), Some(42));
//! assert_eq!(adult("12").error().map(Error::code), Some("AGE_002"));
//! assert_eq!(adult("x").error().map(Error::code), Some("AGE_001"));
//! ```

/// Builds an [`Error`](crate::Error).
///
/// - `error!(code)` - error without a message
/// - `error!(code, "fmt", args...)` - message formatted like `format!`
///
/// # Examples
///
/// ```
/// use outcome_rail::error;
///
/// let bare = error!("ERR_004");
/// assert_eq!(bare.message(), None);
///
/// let limit = 100;
/// let described = error!("ERR_006", "must be below {}", limit);
/// assert_eq!(described.message(), Some("must be below 100"));
/// ```
#[macro_export]
macro_rules! error {
    ($code:expr $(,)?) => {
        $crate::Error::new($code)
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::Error::with_message($code, $crate::__private::format!($($arg)+))
    };
}

/// Builds a failed [`Outcome`](crate::Outcome) from [`error!`](crate::error) arguments.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let out: Outcome<i32> = fail!("ERR_001", "Invalid operation");
/// assert_eq!(out.error().map(|e| e.code()), Some("ERR_001"));
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        $crate::Outcome::Failure($crate::error!($($arg)+))
    };
}

/// Returns early with a failure unless the condition holds.
///
/// Usable in functions returning `Outcome<_, Error>`. The message arguments are
/// only formatted when the condition is false.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure, success, Outcome};
///
/// fn positive(x: i32) -> Outcome<i32> {
///     ensure!(x > 0, "ERR_004");
///     success(x)
/// }
///
/// assert!(positive(1).is_success());
/// assert!(positive(-1).is_failure());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return $crate::fail!($($arg)+);
        }
    };
}

/// Evaluates to the success value of an [`Outcome`](crate::Outcome), or
/// returns early with its error.
///
/// The error is converted with `From`, exactly as the `?` operator does for
/// `Result`, so the enclosing function may use a wider error type.
///
/// # Examples
///
/// ```
/// use outcome_rail::{rail, success, Error, Outcome};
///
/// fn double(out: Outcome<i32>) -> Outcome<i32> {
///     let value = rail!(out);
///     success(value * 2)
/// }
///
/// assert_eq!(double(success(21)).into_value(), Some(42));
/// assert!(double(Outcome::failure(Error::new("ERR_001"))).is_failure());
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            },
        }
    };
}
