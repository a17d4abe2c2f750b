//! Async extensions for outcome-rail.
//!
//! The core stays synchronous: a `Result`-producing future is only turned into
//! an [`Outcome`](crate::Outcome) once it has completed, and async steps are
//! chained with the same short-circuit rule as their sync counterparts.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::async_ext::FutureOutcomeExt;
//! use outcome_rail::{success, Outcome};
//!
//! async fn example() -> Outcome<u32, &'static str> {
//!     async { Ok::<u32, &'static str>(20) }
//!         .into_outcome()
//!         .await
//!         .on_success_async(|n| async move { success(n + 1) })
//!         .await
//! }
//! ```

mod chain;
mod outcome_future;

pub use outcome_future::{FutureOutcomeExt, OutcomeFuture};
