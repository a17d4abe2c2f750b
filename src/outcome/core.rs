use crate::types::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fail-fast container holding either a success value or a single error.
///
/// `Outcome<V, E>` is the railway of this crate: a computation either stays on
/// the success track with a value of type `V`, or switches to the failure track
/// carrying an error of type `E`. Chained steps run left to right and the first
/// failure is absorbing: no later step is invoked, and the error reaches the end
/// of the chain unchanged.
///
/// The error type defaults to [`Error`], but any type can be used.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `V` and `E` do,
/// as an externally tagged enum (`{"Success": ..}` / `{"Failure": ..}`).
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Success(V)` - Contains the success value
/// * `Failure(E)` - Contains the error
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let ok: Outcome<i32> = Outcome::success(42);
/// assert!(ok.is_success());
///
/// let failed: Outcome<i32> = Outcome::failure(Error::new("ERR_001"));
/// assert!(failed.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V, E = Error> {
    Success(V),
    Failure(E),
}

/// Wraps a value on the success track.
///
/// Free-function form of [`Outcome::success`], convenient at return sites.
///
/// # Examples
///
/// ```
/// use outcome_rail::{success, Outcome};
///
/// fn positive(x: i32) -> Outcome<i32> {
///     success(x.abs())
/// }
///
/// assert_eq!(positive(-3).into_value(), Some(3));
/// ```
#[inline]
pub fn success<V, E>(value: V) -> Outcome<V, E> {
    Outcome::Success(value)
}

/// Wraps an error on the failure track.
///
/// Free-function form of [`Outcome::failure`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Error, Outcome};
///
/// let out: Outcome<i32> = failure(Error::new("ERR_004"));
/// assert_eq!(out.error().map(Error::code), Some("ERR_004"));
/// ```
#[inline]
pub fn failure<V, E>(error: E) -> Outcome<V, E> {
    Outcome::Failure(error)
}

impl<V, E> Outcome<V, E> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<i32, &str>::success(42);
    /// assert_eq!(out.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Arguments
    ///
    /// * `error` - The error to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<(), &str>::failure("missing field");
    /// assert!(out.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Wraps a standard `Result`, mapping `Ok` to success and `Err` to failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::from_result("7".parse::<u8>());
    /// assert_eq!(out.into_value(), Some(7));
    /// ```
    #[inline]
    pub fn from_result(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Returns `true` if the outcome is on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::success(1).is_success());
    /// assert!(!Outcome::<i32, &str>::failure("no").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is on the failure track.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value, or `None` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<String, &str>::success("ok".to_string());
    /// assert_eq!(out.value().map(String::as_str), Some("ok"));
    /// ```
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Reads the success value, falling back to `V::default()` on failure.
    ///
    /// This read never panics, but on the failure track it silently yields a
    /// default that is indistinguishable from a genuine value. Check
    /// [`is_success`](Self::is_success) first, or prefer
    /// [`value`](Self::value) / [`match_with`](Self::match_with).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let out: Outcome<i32> = Outcome::failure(Error::new("ERR_001"));
    /// assert_eq!(out.value_or_default(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or_default(&self) -> V
    where
        V: Clone + Default,
    {
        match self {
            Self::Success(value) => value.clone(),
            Self::Failure(_) => V::default(),
        }
    }

    /// Extracts the success value or returns `default`.
    #[must_use]
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Extracts the success value or computes one from the error.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Borrows the error, or `None` on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let out: Outcome<i32> = Outcome::failure(Error::new("ERR_001"));
    /// assert_eq!(out.error().map(Error::code), Some("ERR_001"));
    ///
    /// let ok: Outcome<i32> = Outcome::success(1);
    /// assert!(ok.error().is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<V, E>` into `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts `&mut Outcome<V, E>` into `Outcome<&mut V, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallible step onto the success track.
    ///
    /// On success, `f` receives the value and its outcome is returned as is.
    /// On failure, `f` is never called and the same error is carried forward.
    /// A chain of `on_success` calls therefore stops at the first failing step
    /// and ends with that step's error.
    ///
    /// # Arguments
    ///
    /// * `f` - The next step in the chain
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{failure, success, Error, Outcome};
    ///
    /// fn even(x: i32) -> Outcome<i32> {
    ///     if x % 2 == 0 { success(x) } else { failure(Error::new("ERR_005")) }
    /// }
    ///
    /// assert_eq!(success(4).on_success(even).into_value(), Some(4));
    ///
    /// let odd = Outcome::success(15).on_success(even);
    /// assert_eq!(odd.error().map(Error::code), Some("ERR_005"));
    /// ```
    #[inline]
    pub fn on_success<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`on_success`](Self::on_success).
    #[inline]
    pub fn and_then<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        self.on_success(f)
    }

    /// Transforms the success value with an infallible function.
    ///
    /// Equivalent to `self.on_success(|v| Outcome::success(f(v)))`.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from `V` to `V2`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<i32, &str>::success(42).map(|x| x.to_string());
    /// assert_eq!(out.into_value().as_deref(), Some("42"));
    /// ```
    #[inline]
    pub fn map<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error, leaving a success value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let out = Outcome::<i32, &str>::failure("boom")
    ///     .map_error(|msg| Error::with_message("ERR_500", msg));
    /// assert_eq!(out.error().and_then(Error::message), Some("boom"));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Dispatches to exactly one handler and returns its result.
    ///
    /// `on_success` runs iff the outcome is a success, `on_failure` iff it is a
    /// failure. Each handler runs at most once and exactly one of them runs.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Handler for the success value
    /// * `on_failure` - Handler for the error
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let out: Outcome<u32> = Outcome::failure(Error::with_message("ERR_001", "nope"));
    /// let text = out.match_with(|v| format!("got {v}"), |e| format!("failed with {e}"));
    /// assert_eq!(text, "failed with ERR_001: nope");
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Side-effecting dispatch over a borrowed outcome.
    ///
    /// Same rule as [`match_with`](Self::match_with), for callers that want to
    /// act on the outcome rather than compute from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let out = Outcome::<i32, &str>::success(3);
    /// out.match_ref(|v| seen.push(*v), |_| unreachable!());
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn match_ref<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(&V),
        F: FnOnce(&E),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Chains a recovery step onto the failure track.
    ///
    /// The mirror image of [`on_success`](Self::on_success): `f` only runs on
    /// failure and may put the outcome back on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<i32, &str>::failure("cache miss")
    ///     .on_failure(|_| Outcome::<i32, &str>::success(0));
    /// assert_eq!(out.into_value(), Some(0));
    /// ```
    #[inline]
    pub fn on_failure<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Alias for [`on_failure`](Self::on_failure).
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        self.on_failure(f)
    }

    /// Replaces a failure with a success holding `value`.
    #[inline]
    pub fn fallback(self, value: V) -> Self {
        match self {
            Self::Success(v) => Self::Success(v),
            Self::Failure(_) => Self::Success(value),
        }
    }

    /// Moves a success onto the failure track when `predicate` rejects it.
    ///
    /// `error` is only evaluated when the predicate fails. Failures pass
    /// through untouched and the predicate is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let out: Outcome<i32> = Outcome::success(150)
    ///     .ensure(|x| *x < 100, |_| Error::new("ERR_006"));
    /// assert_eq!(out.error().map(Error::code), Some("ERR_006"));
    /// ```
    #[inline]
    pub fn ensure<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error(&value))
                }
            },
            failed => failed,
        }
    }

    /// Calls `f` with a reference to the success value, then passes through.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error, then passes through.
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Converts into a standard `Result`, e.g. to use the `?` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_result(), Ok(42));
    /// assert_eq!(Outcome::<i32, &str>::failure("bad").into_result(), Err("bad"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::failure("inner"));
    /// assert_eq!(nested.flatten().into_error(), Some("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<V, E> {
        self.on_success(|inner| inner)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Self::from_result(result)
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
