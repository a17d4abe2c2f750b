//! Railway-oriented, fail-fast result handling.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Inspecting an Outcome
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let out: Outcome<i32> = Outcome::failure(Error::with_message("ERR_001", "Invalid operation"));
//!
//! assert!(!out.is_success());
//! assert_eq!(out.value_or_default(), 0);
//! assert_eq!(out.error().map(Error::code), Some("ERR_001"));
//! ```
//!
//! ## Short-circuiting Chains
//!
//! ```
//! use outcome_rail::{fail, success, Outcome};
//!
//! let out: Outcome<i32> = success(15)
//!     .on_success(|x| if x > 0 { success(x) } else { fail!("ERR_004") })
//!     .on_success(|x| if x % 2 == 0 { success(x) } else { fail!("ERR_005") })
//!     .on_success(|x| if x < 100 { success(x) } else { fail!("ERR_006") });
//!
//! assert_eq!(out.error().map(|e| e.code()), Some("ERR_005"));
//! ```
//!
//! ## Mapping
//!
//! ```
//! use outcome_rail::{success, Outcome};
//!
//! let out: Outcome<String> = success(42).map(|x: i32| x.to_string());
//! assert_eq!(out.into_value().as_deref(), Some("42"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Result, Option, and Outcome
pub mod convert;
/// Error construction and propagation macros
pub mod macros;
/// The Outcome container, iteration and fail-fast collection
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Worked example: a user registration pipeline (requires `std` feature)
#[cfg(feature = "std")]
pub mod registration;
/// Core traits for interoperating with Result and Option
pub mod traits;
/// The Error record and allocation helpers
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use outcome::{failure, success, Outcome};
pub use traits::*;
pub use types::Error;

#[doc(hidden)]
pub mod __private {
    pub use crate::types::alloc_type::format;
}
