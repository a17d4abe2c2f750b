/// Two-track carrier whose failure side can be rewritten.
///
/// Implemented for both `Result<T, E>` and [`Outcome<V, E>`](crate::Outcome),
/// so helpers that only touch the error (wrapping a low-level error in an
/// [`Error`](crate::Error), say) can be written once for either carrier.
///
/// `Success` names the value on the success track. [`ErrorCategory`](super::ErrorCategory)
/// relies on it to tie a lifted value back to its carrier.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::Error;
///
/// fn tag_io<C: WithError<&'static str>>(carrier: C) -> C::ErrorOutput<Error> {
///     carrier.fmap_error(|detail| Error::with_message("IO_001", detail))
/// }
///
/// let read: Result<u32, &str> = Err("disk full");
/// assert_eq!(tag_io(read), Err(Error::with_message("IO_001", "disk full")));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Rewrites the error with `f`; a success passes through untouched and
    /// `f` is not called.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Hands the carrier back as a plain `Result`.
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> Result<T, E> {
        self
    }
}
