//! The fail-fast [`Outcome`] container and its iteration support.
//!
//! An [`Outcome`] is exactly one of a success value or a single error. Steps are
//! chained with [`Outcome::on_success`] and [`Outcome::map`]; the first failure
//! short-circuits the rest of the chain and is reported unchanged.
//!
//! # Key Components
//!
//! - [`Outcome`] - Tagged union of `Success(V)` and `Failure(E)`
//! - [`success`] / [`failure`] - Smart constructors for return sites
//! - Iterator adapters and fail-fast collection
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{failure, success, Error, Outcome};
//!
//! let out: Outcome<i32> = success(15)
//!     .on_success(|x| if x > 0 { success(x) } else { failure(Error::new("ERR_004")) })
//!     .on_success(|x| if x % 2 == 0 { success(x) } else { failure(Error::new("ERR_005")) })
//!     .on_success(|x| if x < 100 { success(x) } else { failure(Error::new("ERR_006")) });
//!
//! assert_eq!(out.error().map(Error::code), Some("ERR_005"));
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
