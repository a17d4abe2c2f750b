//! Async counterparts of the chaining operations.

use core::future::Future;

use crate::outcome::Outcome;

impl<V, E> Outcome<V, E> {
    /// Chains an async fallible step onto the success track.
    ///
    /// Follows the same short-circuit rule as [`Outcome::on_success`]: on
    /// failure, `f` is never called, so its future is never created or polled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::{success, Outcome};
    ///
    /// async fn lookup(id: u32) -> Outcome<String> {
    ///     success(format!("user-{id}"))
    /// }
    ///
    /// async fn example() {
    ///     let out = Outcome::<u32>::success(7).on_success_async(lookup).await;
    ///     assert_eq!(out.into_value().as_deref(), Some("user-7"));
    /// }
    /// ```
    pub async fn on_success_async<V2, F, Fut>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<V2, E>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the success value with an async infallible function.
    pub async fn map_async<V2, F, Fut>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = V2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}
