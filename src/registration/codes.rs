//! Error codes reported by the registration pipeline, in step order.

/// The email is empty or whitespace only.
pub const EMAIL_REQUIRED: &str = "EMAIL_001";
/// The email is not of the form `local@domain.tld`.
pub const EMAIL_MALFORMED: &str = "EMAIL_002";
/// The email's domain is not on the policy's allow list.
pub const EMAIL_DOMAIN_NOT_ALLOWED: &str = "EMAIL_003";
/// The password is shorter than the policy minimum.
pub const PASSWORD_TOO_SHORT: &str = "PASS_001";
/// The password lacks an upper case letter, a lower case letter, a digit or a symbol.
pub const PASSWORD_TOO_WEAK: &str = "PASS_002";
/// The email service cannot be reached.
pub const NOTIFIER_UNAVAILABLE: &str = "NOTIFY_001";
/// The welcome template is rejected by the email service.
pub const TEMPLATE_INVALID: &str = "NOTIFY_002";
/// The email service accepted the request but did not deliver it.
pub const DELIVERY_FAILED: &str = "NOTIFY_003";
