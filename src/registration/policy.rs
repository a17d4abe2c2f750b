use smallvec::{smallvec, SmallVec};

use crate::types::alloc_type::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline capacity for the allowed domain list; longer lists spill to the heap.
pub type DomainList = SmallVec<[Cow<'static, str>; 4]>;

/// Runtime configuration of the registration pipeline.
///
/// With the `serde` feature the policy can be loaded from any serde format;
/// missing fields fall back to [`RegistrationPolicy::default`].
///
/// # Examples
///
/// ```
/// use outcome_rail::registration::RegistrationPolicy;
///
/// let policy = RegistrationPolicy::default()
///     .allow_domain("example.org")
///     .min_password_length(12);
///
/// assert!(policy.is_domain_allowed("EXAMPLE.org"));
/// assert!(policy.is_domain_allowed("gmail.com"));
/// assert_eq!(policy.password_floor(), 12);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPolicy {
    allowed_domains: DomainList,
    min_password_length: usize,
    welcome_template: Cow<'static, str>,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            allowed_domains: smallvec![
                Cow::Borrowed("gmail.com"),
                Cow::Borrowed("outlook.com"),
                Cow::Borrowed("yahoo.com"),
            ],
            min_password_length: 8,
            welcome_template: Cow::Borrowed("welcome"),
        }
    }
}

impl RegistrationPolicy {
    /// Creates a policy that allows exactly the given domains.
    pub fn with_domains<I, D>(domains: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Cow<'static, str>>,
    {
        Self { allowed_domains: domains.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Adds a domain to the allow list.
    #[must_use]
    pub fn allow_domain<D>(mut self, domain: D) -> Self
    where
        D: Into<Cow<'static, str>>,
    {
        self.allowed_domains.push(domain.into());
        self
    }

    /// Sets the minimum password length, counted in characters.
    #[must_use]
    pub fn min_password_length(mut self, length: usize) -> Self {
        self.min_password_length = length;
        self
    }

    /// Sets the template used for the welcome message.
    #[must_use]
    pub fn welcome_template<T>(mut self, template: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.welcome_template = template.into();
        self
    }

    /// Returns `true` if `domain` is on the allow list, ignoring ASCII case.
    #[must_use]
    pub fn is_domain_allowed(&self, domain: &str) -> bool {
        self.allowed_domains
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(domain))
    }

    #[must_use]
    pub fn allowed_domains(&self) -> &[Cow<'static, str>] {
        &self.allowed_domains
    }

    #[must_use]
    pub fn password_floor(&self) -> usize {
        self.min_password_length
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.welcome_template
    }
}
