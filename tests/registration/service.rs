use outcome_rail::registration::{
    codes, FnvPasswordHasher, InMemoryNotifier, PasswordHasher, RegistrationPolicy,
    RegistrationService,
};
use outcome_rail::Error;

const EMAIL: &str = "TEST@GMAIL.COM";
const PASSWORD: &str = "Pass123!@#";

fn code_of(service: &RegistrationService<&InMemoryNotifier>, email: &str, password: &str) -> String {
    service
        .register(email, password)
        .error()
        .map(|e| e.code().to_string())
        .unwrap_or_default()
}

#[test]
fn valid_registration_normalizes_email() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    let user = service.register(EMAIL, PASSWORD).into_value().unwrap();

    assert_eq!(user.email, "test@gmail.com");
    assert_eq!(user.password_hash, FnvPasswordHasher::default().hash(PASSWORD));
    assert_ne!(user.password_hash, PASSWORD);
}

#[test]
fn valid_registration_sends_one_welcome_email() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    assert!(service.register(EMAIL, PASSWORD).is_success());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "test@gmail.com");
    assert_eq!(sent[0].template, "welcome");
}

#[test]
fn unavailable_notifier_fails_before_template_check() {
    for notifier in [
        InMemoryNotifier::new().unavailable(),
        InMemoryNotifier::new().unavailable().rejecting_templates(),
    ] {
        let service = RegistrationService::new(&notifier);
        let out = service.register(EMAIL, PASSWORD);

        assert_eq!(out.error().map(Error::code), Some(codes::NOTIFIER_UNAVAILABLE));
        assert_eq!(out.error().map(Error::code), Some("NOTIFY_001"));
        assert_eq!(notifier.sent_count(), 0);
    }
}

#[test]
fn invalid_template_is_reported_when_service_is_up() {
    let notifier = InMemoryNotifier::new().rejecting_templates();
    let service = RegistrationService::new(&notifier);

    assert_eq!(code_of(&service, EMAIL, PASSWORD), codes::TEMPLATE_INVALID);
    assert_eq!(notifier.sent_count(), 0);
}

#[test]
fn blank_template_from_policy_is_rejected() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier)
        .with_policy(RegistrationPolicy::default().welcome_template("   "));

    assert_eq!(code_of(&service, EMAIL, PASSWORD), codes::TEMPLATE_INVALID);
}

#[test]
fn delivery_failure_is_the_last_step() {
    let notifier = InMemoryNotifier::new().failing_delivery();
    let service = RegistrationService::new(&notifier);

    assert_eq!(code_of(&service, EMAIL, PASSWORD), codes::DELIVERY_FAILED);
}

#[test]
fn email_rules_are_checked_in_order() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    assert_eq!(code_of(&service, "", PASSWORD), codes::EMAIL_REQUIRED);
    assert_eq!(code_of(&service, "   ", PASSWORD), codes::EMAIL_REQUIRED);
    assert_eq!(code_of(&service, "no-at-sign", PASSWORD), codes::EMAIL_MALFORMED);
    assert_eq!(code_of(&service, "@gmail.com", PASSWORD), codes::EMAIL_MALFORMED);
    assert_eq!(code_of(&service, "a@@gmail.com", PASSWORD), codes::EMAIL_MALFORMED);
    assert_eq!(code_of(&service, "a b@gmail.com", PASSWORD), codes::EMAIL_MALFORMED);
    assert_eq!(code_of(&service, "a@localhost", PASSWORD), codes::EMAIL_MALFORMED);
    assert_eq!(code_of(&service, "a@gmail..com", PASSWORD), codes::EMAIL_MALFORMED);
    assert_eq!(code_of(&service, "a@example.com", PASSWORD), codes::EMAIL_DOMAIN_NOT_ALLOWED);
    assert_eq!(notifier.sent_count(), 0);
}

#[test]
fn addresses_outside_the_email_grammar_are_malformed() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    let malformed = [
        "<script>@gmail.com",
        "a\"b,c@gmail.com",
        "(x)@gmail.com",
        "test@#gmail.com",
        "test@$gmail.com",
        "test@/gmail.com",
        "test@\\gmail.com",
        "a@-gmail.com",
        "a@gmail-.com",
        "a@.gmail.com",
        "a@gmail.com.",
    ];
    for email in malformed {
        assert_eq!((email, code_of(&service, email, PASSWORD).as_str()), (email, codes::EMAIL_MALFORMED));
    }
    assert_eq!(notifier.sent_count(), 0);
}

#[test]
fn atext_local_parts_are_accepted() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    for email in ["first.last@gmail.com", "user+tag@gmail.com", "o'brien@outlook.com", "a_b-c@yahoo.com"] {
        assert!(service.register(email, PASSWORD).is_success(), "{email} should register");
    }
    assert_eq!(notifier.sent_count(), 4);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    let user = service.register("  Someone@Outlook.com ", PASSWORD).into_value().unwrap();
    assert_eq!(user.email, "someone@outlook.com");
}

#[test]
fn password_rules_are_checked_in_order() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    assert_eq!(code_of(&service, EMAIL, "P1!a"), codes::PASSWORD_TOO_SHORT);
    assert_eq!(code_of(&service, EMAIL, "password123!"), codes::PASSWORD_TOO_WEAK);
    assert_eq!(code_of(&service, EMAIL, "PASSWORD123!"), codes::PASSWORD_TOO_WEAK);
    assert_eq!(code_of(&service, EMAIL, "Password!!!"), codes::PASSWORD_TOO_WEAK);
    assert_eq!(code_of(&service, EMAIL, "Password123"), codes::PASSWORD_TOO_WEAK);
}

#[test]
fn first_failing_rule_wins_over_later_ones() {
    let notifier = InMemoryNotifier::new().unavailable();
    let service = RegistrationService::new(&notifier);

    // Later rules would fail too, but only the domain error is reported.
    let out = service.register("a@example.com", "weak");
    assert_eq!(
        out.into_error(),
        Some(Error::with_message(
            codes::EMAIL_DOMAIN_NOT_ALLOWED,
            "Email domain 'example.com' is not allowed"
        ))
    );
}

#[test]
fn password_length_message_names_the_floor() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier)
        .with_policy(RegistrationPolicy::default().min_password_length(12));

    let out = service.register(EMAIL, PASSWORD);
    assert_eq!(
        out.error().and_then(Error::message),
        Some("Password must be at least 12 characters long")
    );
}

struct ReversingHasher;

impl PasswordHasher for ReversingHasher {
    fn hash(&self, password: &str) -> String {
        password.chars().rev().collect()
    }
}

#[test]
fn custom_hasher_is_used() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier).with_hasher(ReversingHasher);

    let user = service.register(EMAIL, PASSWORD).into_value().unwrap();
    assert_eq!(user.password_hash, "#@!321ssaP");
}

#[test]
fn custom_policy_changes_allowed_domains() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier)
        .with_policy(RegistrationPolicy::with_domains(["corp.example"]));

    assert_eq!(code_of(&service, EMAIL, PASSWORD), codes::EMAIL_DOMAIN_NOT_ALLOWED);
    assert!(service.register("dev@corp.example", PASSWORD).is_success());
}
