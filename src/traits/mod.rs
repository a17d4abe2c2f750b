//! Core traits for outcome handling and composition.
//!
//! This module defines the traits that let outcome-rail interoperate with the
//! standard library's carriers:
//!
//! - [`ErrorCategory`]: Categorical abstraction for lifting values and handling errors
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//! - [`IntoOutcome`] / [`OptionOutcomeExt`]: Conversions from `Result` and `Option`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{ErrorCategory, WithError};
//! use outcome_rail::Outcome;
//!
//! let success: Result<i32, String> = <Result<(), String>>::lift(42);
//! assert_eq!(success, Ok(42));
//!
//! let out: Outcome<i32, String> = <Outcome<(), String>>::lift(42);
//! assert_eq!(out.to_result(), Ok(42));
//! ```

pub mod error_category;
pub mod into_outcome;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
pub use with_error::WithError;
