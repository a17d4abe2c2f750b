//! Tracing integration for outcome-rail.
//!
//! Emits structured events for the steps of a chain without changing the
//! outcome flowing through it. Failures are recorded with the error's code and
//! message as separate fields, so subscribers can filter on `error.code`.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::outcome::Outcome;
use crate::types::Error;

/// Extension trait that reports chain steps to `tracing`.
///
/// | call | success | failure |
/// |------|---------|---------|
/// | `trace_failure` | nothing | `WARN` |
/// | `trace_step` | `DEBUG` | `WARN` |
///
/// Every event carries a `step` field; failure events add `error.code` and,
/// when present, `error.message`.
///
/// # Example
///
/// ```rust
/// use outcome_rail::trace::OutcomeTraceExt;
/// use outcome_rail::{Error, Outcome};
///
/// let out: Outcome<u32> = Outcome::failure(Error::new("ERR_005"));
/// let out = out.trace_failure("check_even");
/// assert!(out.is_failure());
/// ```
pub trait OutcomeTraceExt<V>: Sized {
    /// Emits a `WARN` event for a failure; a success is passed on silently.
    fn trace_failure(self, step: &'static str) -> Self;

    /// Emits a `DEBUG` event on success and a `WARN` event on failure.
    fn trace_step(self, step: &'static str) -> Self;

    /// Runs the next step of the chain inside `span`.
    ///
    /// Like [`Outcome::on_success`], `f` is only called (and the span only
    /// entered) on the success track.
    fn on_success_in<V2, F>(self, span: &Span, f: F) -> Outcome<V2>
    where
        F: FnOnce(V) -> Outcome<V2>;
}

impl<V> OutcomeTraceExt<V> for Outcome<V> {
    fn trace_failure(self, step: &'static str) -> Self {
        if let Outcome::Failure(error) = &self {
            warn_failed(step, error);
        }
        self
    }

    fn trace_step(self, step: &'static str) -> Self {
        match &self {
            Outcome::Success(_) => tracing::debug!(step, "step succeeded"),
            Outcome::Failure(error) => warn_failed(step, error),
        }
        self
    }

    fn on_success_in<V2, F>(self, span: &Span, f: F) -> Outcome<V2>
    where
        F: FnOnce(V) -> Outcome<V2>,
    {
        self.on_success(|value| span.in_scope(|| f(value)))
    }
}

#[inline]
fn warn_failed(step: &'static str, error: &Error) {
    tracing::warn!(
        step,
        error.code = error.code(),
        error.message = error.message(),
        "step failed"
    );
}
