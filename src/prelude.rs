//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<u32> {
//!     input
//!         .parse::<u32>()
//!         .map_err(|err| Error::with_message("PARSE_001", err.to_string()))
//!         .into_outcome()
//! }
//!
//! assert!(parse("7").is_success());
//! assert_eq!(parse("x").error().map(Error::code), Some("PARSE_001"));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`error!`], [`fail!`], [`ensure!`], [`rail!`]
//! - **Types**: [`Outcome`], [`Error`]
//! - **Functions**: [`success`], [`failure`]
//! - **Traits**: [`IntoOutcome`], [`OptionOutcomeExt`]
//! - **Async** (feature `async`): [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt)
//! - **Tracing** (feature `tracing`): [`OutcomeTraceExt`](crate::trace::OutcomeTraceExt)

// Macros
pub use crate::{ensure, error, fail, rail};

// Core types
pub use crate::outcome::{failure, success, Outcome};
pub use crate::types::Error;

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt};

#[cfg(feature = "async")]
pub use crate::async_ext::FutureOutcomeExt;

#[cfg(feature = "tracing")]
pub use crate::trace::OutcomeTraceExt;
