//! Inert error record carried on the failure track.
//!
//! [`Error`] pairs a machine-readable `code` with an optional human-readable
//! message. It performs no validation of either field: producers are
//! responsible for assigning meaningful codes.

use core::fmt::{self, Display};

use crate::types::alloc_type::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable error value made of a code and an optional message.
///
/// Two errors are equal iff both their codes and their messages are equal.
/// An absent message is distinct from an empty one.
///
/// # Serde Support
///
/// With the `serde` feature, `Error` serializes as
/// `{"code": "...", "message": "..."}`, with `message` as `null` when absent.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let bare = Error::new("ERR_004");
/// assert_eq!(bare.code(), "ERR_004");
/// assert_eq!(bare.message(), None);
///
/// let described = Error::with_message("ERR_001", "Invalid operation");
/// assert_eq!(described.message(), Some("Invalid operation"));
/// assert_ne!(bare, Error::with_message("ERR_004", ""));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    code: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
}

impl Error {
    /// Creates an error with the given code and no message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::new("NOTIFY_001");
    /// assert_eq!(err.to_string(), "NOTIFY_001");
    /// ```
    #[inline]
    pub fn new<C>(code: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), message: None }
    }

    /// Creates an error with the given code and message.
    #[inline]
    pub fn with_message<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), message: Some(message.into()) }
    }

    /// Creates an error whose message may or may not be present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let detail: Option<String> = None;
    /// assert_eq!(Error::message_opt("ERR_002", detail), Error::new("ERR_002"));
    /// ```
    #[inline]
    pub fn message_opt<C, M>(code: C, message: Option<M>) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), message: message.map(Into::into) }
    }

    /// Returns the machine-readable code.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message, if one was given.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns `true` if this error carries the given code.
    #[must_use]
    #[inline]
    pub fn has_code(&self, code: &str) -> bool {
        self.code == code
    }
}

/// Renders `CODE: message`, or just `CODE` without a message.
///
/// The alternate form (`{:#}`) renders `[CODE] message`.
impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, f.alternate()) {
            (Some(message), false) => write!(f, "{}: {}", self.code, message),
            (Some(message), true) => write!(f, "[{}] {}", self.code, message),
            (None, false) => f.write_str(&self.code),
            (None, true) => write!(f, "[{}]", self.code),
        }
    }
}

impl core::error::Error for Error {}
