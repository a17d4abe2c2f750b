use crate::traits::WithError;

/// Carrier types that can lift a plain value or an error onto their tracks.
///
/// Generic code written against `ErrorCategory` works the same for
/// `Result<(), E>` and [`Outcome<(), E>`](crate::Outcome).
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ErrorCategory;
///
/// let ok: Result<i32, &str> = <Result<(), &str>>::lift(7);
/// assert_eq!(ok, Ok(7));
/// ```
pub trait ErrorCategory<E> {
    type ErrorFunctor<T>: WithError<E, Success = T>;

    fn lift<T>(value: T) -> Self::ErrorFunctor<T>;

    fn handle_error<T>(error: E) -> Self::ErrorFunctor<T>;
}

impl<E> ErrorCategory<E> for Result<(), E> {
    type ErrorFunctor<T> = Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Result<T, E> {
        Err(error)
    }
}
