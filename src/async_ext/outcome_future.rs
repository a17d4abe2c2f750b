//! Future wrapper that lands a `Result`-producing future on the rails.
//!
//! The inner future runs to completion untouched; only its output is wrapped
//! into an [`Outcome`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;

pin_project! {
    /// A Future wrapper that converts `Result<T, E>` output into `Outcome<T, E>`.
    ///
    /// # Cancel Safety
    ///
    /// `OutcomeFuture` is cancel-safe if the inner future is cancel-safe. It
    /// holds no state of its own besides the inner future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::FutureOutcomeExt;
    ///
    /// async fn example() {
    ///     let out = async { Ok::<_, &str>(42) }.into_outcome().await;
    ///     assert!(out.is_success());
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> OutcomeFuture<Fut> {
    /// Creates a new `OutcomeFuture` around the given future.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut, T, E> Future for OutcomeFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::from_result)
    }
}

impl<Fut, T, E> FusedFuture for OutcomeFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

/// Extension trait for futures resolving to `Result<T, E>`.
///
/// # Examples
///
/// ```rust,no_run
/// use outcome_rail::async_ext::FutureOutcomeExt;
/// use outcome_rail::{Error, Outcome};
///
/// async fn fetch_quota(_user: u64) -> Result<u32, Error> {
///     Err(Error::new("QUOTA_001"))
/// }
///
/// async fn quota(user: u64) -> Outcome<u32> {
///     fetch_quota(user).into_outcome().await
/// }
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future so that it resolves to an [`Outcome`].
    fn into_outcome(self) -> OutcomeFuture<Self>;
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn into_outcome(self) -> OutcomeFuture<Self> {
        OutcomeFuture::new(self)
    }
}
