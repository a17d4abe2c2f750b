//! Worked example: user registration as a railway.
//!
//! A [`RegistrationService`] validates an email address and a password, hashes
//! the password and sends a welcome email. Every step returns an
//! [`Outcome`](crate::Outcome), and the steps are composed with
//! [`on_success`](crate::Outcome::on_success), so the first rule that rejects
//! the input decides the reported [`Error`](crate::Error) and nothing after it
//! runs.
//!
//! The email service and the hasher are collaborators behind the [`Notifier`]
//! and [`PasswordHasher`] traits; [`InMemoryNotifier`] and
//! [`FnvPasswordHasher`] are the bundled implementations.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::registration::{codes, InMemoryNotifier, RegistrationService};
//!
//! let service = RegistrationService::new(InMemoryNotifier::new().unavailable());
//! let out = service.register("TEST@GMAIL.COM", "Pass123!@#");
//!
//! let report = out.match_with(
//!     |user| format!("registered {}", user.email),
//!     |err| format!("rejected: {err}"),
//! );
//! assert_eq!(report, "rejected: NOTIFY_001: Email service is unavailable");
//! assert_eq!(codes::NOTIFIER_UNAVAILABLE, "NOTIFY_001");
//! ```

pub mod codes;
mod hasher;
mod notifier;
mod policy;
mod service;

pub use hasher::{FnvPasswordHasher, PasswordHasher};
pub use notifier::{InMemoryNotifier, Notifier, WelcomeMessage};
pub use policy::{DomainList, RegistrationPolicy};
pub use service::{normalize_email, RegisteredUser, RegistrationService};
