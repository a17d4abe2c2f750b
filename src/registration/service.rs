use std::sync::LazyLock;

use regex::Regex;

use crate::outcome::{success, Outcome};
use crate::registration::codes;
use crate::registration::hasher::{FnvPasswordHasher, PasswordHasher};
use crate::registration::notifier::{Notifier, WelcomeMessage};
use crate::registration::policy::RegistrationPolicy;
use crate::types::alloc_type::{format, Cow, String};
use crate::types::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Account produced by a successful registration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegisteredUser {
    /// Trimmed, lower-cased email address.
    pub email: String,
    pub password_hash: String,
}

/// Multi-step user registration expressed as a single `on_success` chain.
///
/// Steps run in a fixed order and the first failing step decides the error;
/// no later step runs, so a rejected password never reaches the email service
/// and an unreachable service is reported before its template is checked.
///
/// | step | failure code |
/// |------|--------------|
/// | email present | [`EMAIL_001`](codes::EMAIL_REQUIRED) |
/// | email well formed | [`EMAIL_002`](codes::EMAIL_MALFORMED) |
/// | domain allowed | [`EMAIL_003`](codes::EMAIL_DOMAIN_NOT_ALLOWED) |
/// | password length | [`PASS_001`](codes::PASSWORD_TOO_SHORT) |
/// | password strength | [`PASS_002`](codes::PASSWORD_TOO_WEAK) |
/// | email service available | [`NOTIFY_001`](codes::NOTIFIER_UNAVAILABLE) |
/// | welcome template valid | [`NOTIFY_002`](codes::TEMPLATE_INVALID) |
/// | welcome email delivered | [`NOTIFY_003`](codes::DELIVERY_FAILED) |
///
/// # Examples
///
/// ```
/// use outcome_rail::registration::{InMemoryNotifier, RegistrationService};
///
/// let notifier = InMemoryNotifier::new();
/// let service = RegistrationService::new(&notifier);
///
/// let user = service.register("TEST@GMAIL.COM", "Pass123!@#");
/// assert_eq!(user.value().map(|u| u.email.as_str()), Some("test@gmail.com"));
/// assert_eq!(notifier.sent_count(), 1);
///
/// let rejected = service.register("someone@gmail.com", "short");
/// assert_eq!(rejected.error().map(|e| e.code()), Some("PASS_001"));
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationService<N, H = FnvPasswordHasher> {
    notifier: N,
    hasher: H,
    policy: RegistrationPolicy,
}

impl<N: Notifier> RegistrationService<N> {
    /// Creates a service with the default policy and hasher.
    pub fn new(notifier: N) -> Self {
        Self { notifier, hasher: FnvPasswordHasher::default(), policy: RegistrationPolicy::default() }
    }
}

impl<N: Notifier, H: PasswordHasher> RegistrationService<N, H> {
    /// Replaces the password hasher.
    pub fn with_hasher<H2: PasswordHasher>(self, hasher: H2) -> RegistrationService<N, H2> {
        RegistrationService { notifier: self.notifier, hasher, policy: self.policy }
    }

    /// Replaces the policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Runs the registration pipeline for one email/password pair.
    pub fn register(&self, email: &str, password: &str) -> Outcome<RegisteredUser> {
        require_email(email)
            .on_success(check_email_format)
            .map(normalize_email)
            .on_success(|email| self.check_domain(email))
            .on_success(|email| self.check_password_length(password).map(|()| email))
            .on_success(|email| check_password_strength(password).map(|()| email))
            .map(|email| RegisteredUser { email, password_hash: self.hasher.hash(password) })
            .on_success(|user| self.check_notifier().map(|()| user))
            .on_success(|user| self.check_template().map(|()| user))
            .on_success(|user| self.send_welcome(user))
    }

    fn check_domain(&self, email: String) -> Outcome<String> {
        let domain = email.rsplit('@').next().unwrap_or_default();
        let out = if self.policy.is_domain_allowed(domain) {
            success(email)
        } else {
            Outcome::failure(Error::with_message(
                codes::EMAIL_DOMAIN_NOT_ALLOWED,
                format!("Email domain '{domain}' is not allowed"),
            ))
        };
        traced(out, "check_domain")
    }

    fn check_password_length(&self, password: &str) -> Outcome<()> {
        let floor = self.policy.password_floor();
        let out = if password.chars().count() >= floor {
            success(())
        } else {
            Outcome::failure(Error::with_message(
                codes::PASSWORD_TOO_SHORT,
                format!("Password must be at least {floor} characters long"),
            ))
        };
        traced(out, "check_password_length")
    }

    fn check_notifier(&self) -> Outcome<()> {
        let out = if self.notifier.is_available() {
            success(())
        } else {
            Outcome::failure(Error::with_message(
                codes::NOTIFIER_UNAVAILABLE,
                "Email service is unavailable",
            ))
        };
        traced(out, "check_notifier")
    }

    fn check_template(&self) -> Outcome<()> {
        let template = self.policy.template();
        let out = if self.notifier.is_template_valid(template) {
            success(())
        } else {
            Outcome::failure(Error::with_message(
                codes::TEMPLATE_INVALID,
                format!("Email template '{template}' is invalid"),
            ))
        };
        traced(out, "check_template")
    }

    fn send_welcome(&self, user: RegisteredUser) -> Outcome<RegisteredUser> {
        let message = WelcomeMessage {
            to: user.email.clone(),
            template: Cow::Owned(self.policy.template().into()),
        };
        traced(self.notifier.send(message).map(|()| user), "send_welcome")
    }
}

fn require_email(email: &str) -> Outcome<&str> {
    let out = if email.trim().is_empty() {
        Outcome::failure(Error::with_message(codes::EMAIL_REQUIRED, "Email is required"))
    } else {
        success(email)
    };
    traced(out, "require_email")
}

/// `local@domain.tld`: an atext local part and dot-separated domain labels of
/// letters, digits and inner hyphens, with at least one dot.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

fn is_well_formed(email: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|regex| regex.is_match(email))
}

fn check_email_format(email: &str) -> Outcome<&str> {
    let trimmed = email.trim();
    let out = if is_well_formed(trimmed) {
        success(trimmed)
    } else {
        Outcome::failure(Error::with_message(codes::EMAIL_MALFORMED, "Email format is invalid"))
    };
    traced(out, "check_email_format")
}

/// Trims and lower-cases an address so lookups are case-insensitive.
///
/// # Examples
///
/// ```
/// use outcome_rail::registration::normalize_email;
///
/// assert_eq!(normalize_email("  TEST@GMAIL.COM "), "test@gmail.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn check_password_strength(password: &str) -> Outcome<()> {
    let upper = password.chars().any(char::is_uppercase);
    let lower = password.chars().any(char::is_lowercase);
    let digit = password.chars().any(|c| c.is_ascii_digit());
    let symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let out = if upper && lower && digit && symbol {
        success(())
    } else {
        Outcome::failure(Error::with_message(
            codes::PASSWORD_TOO_WEAK,
            "Password needs upper and lower case letters, a digit and a symbol",
        ))
    };
    traced(out, "check_password_strength")
}

#[cfg(feature = "tracing")]
#[inline]
fn traced<V>(out: Outcome<V>, step: &'static str) -> Outcome<V> {
    use crate::trace::OutcomeTraceExt;
    out.trace_step(step)
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn traced<V>(out: Outcome<V>, _step: &'static str) -> Outcome<V> {
    out
}
