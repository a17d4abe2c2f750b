// Note: this module only provides impl blocks for WithError and ErrorCategory,
// which become available as soon as the outcome module is compiled.
use crate::outcome::core::Outcome;
use crate::traits::ErrorCategory;
use crate::traits::WithError;

/// Implementation of `ErrorCategory` for `Outcome` types.
///
/// This allows `Outcome<(), E>` to act as an error category, where:
/// - `lift` creates `Success` values
/// - `handle_error` creates `Failure` values
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ErrorCategory;
/// use outcome_rail::Outcome;
///
/// let ok: Outcome<i32, String> = <Outcome<(), String>>::lift(42);
/// assert!(ok.is_success());
///
/// let failed: Outcome<i32, String> = <Outcome<(), String>>::handle_error("error".to_string());
/// assert!(failed.is_failure());
/// ```
impl<E> ErrorCategory<E> for Outcome<(), E> {
    type ErrorFunctor<T> = Outcome<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Outcome<T, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Outcome<T, E> {
        Outcome::Failure(error)
    }
}

/// Implementation of `WithError` for `Outcome` types.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::Outcome;
///
/// let out: Outcome<i32, u16> = Outcome::failure(404);
/// let mapped = out.fmap_error(|code| format!("HTTP {code}"));
/// assert_eq!(mapped.into_error().as_deref(), Some("HTTP 404"));
///
/// let ok: Outcome<i32, u16> = Outcome::success(42);
/// assert_eq!(ok.to_result(), Ok(42));
/// ```
impl<V, E> WithError<E> for Outcome<V, E> {
    type Success = V;
    type ErrorOutput<G> = Outcome<V, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_error(f)
    }

    #[inline]
    fn to_result(self) -> Result<V, E> {
        self.into_result()
    }
}
