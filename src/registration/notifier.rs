use core::cell::RefCell;

use crate::outcome::{success, Outcome};
use crate::registration::codes;
use crate::types::alloc_type::{Cow, String, Vec};
use crate::types::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Welcome email handed to a [`Notifier`] at the end of a registration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeMessage {
    pub to: String,
    pub template: Cow<'static, str>,
}

/// Outbound email service used by the registration pipeline.
///
/// The pipeline probes availability before it validates the template, and
/// only sends once both checks passed.
pub trait Notifier {
    /// Whether the service can currently accept messages.
    fn is_available(&self) -> bool;

    /// Whether `template` names a template the service can render.
    fn is_template_valid(&self, template: &str) -> bool;

    /// Delivers a welcome message.
    fn send(&self, message: WelcomeMessage) -> Outcome<()>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn is_template_valid(&self, template: &str) -> bool {
        (**self).is_template_valid(template)
    }

    fn send(&self, message: WelcomeMessage) -> Outcome<()> {
        (**self).send(message)
    }
}

/// In-process [`Notifier`] that records delivered messages.
///
/// Every behaviour of a real email service the pipeline depends on can be
/// switched off, which makes it the test double for the failure paths.
///
/// # Examples
///
/// ```
/// use outcome_rail::registration::{InMemoryNotifier, Notifier};
///
/// let notifier = InMemoryNotifier::new().unavailable();
/// assert!(!notifier.is_available());
/// assert!(notifier.is_template_valid("welcome"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    offline: bool,
    reject_templates: bool,
    drop_messages: bool,
    sent: RefCell<Vec<WelcomeMessage>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the service as unreachable.
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Rejects every template.
    #[must_use]
    pub fn rejecting_templates(mut self) -> Self {
        self.reject_templates = true;
        self
    }

    /// Fails every delivery.
    #[must_use]
    pub fn failing_delivery(mut self) -> Self {
        self.drop_messages = true;
        self
    }

    /// Returns a copy of the messages delivered so far.
    pub fn sent(&self) -> Vec<WelcomeMessage> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Notifier for InMemoryNotifier {
    fn is_available(&self) -> bool {
        !self.offline
    }

    fn is_template_valid(&self, template: &str) -> bool {
        !self.reject_templates && !template.trim().is_empty()
    }

    fn send(&self, message: WelcomeMessage) -> Outcome<()> {
        if self.drop_messages {
            return Outcome::failure(Error::with_message(
                codes::DELIVERY_FAILED,
                "Welcome email could not be delivered",
            ));
        }
        self.sent.borrow_mut().push(message);
        success(())
    }
}
