//! Runs a handful of sign-ups through the registration railway and prints
//! which step, if any, rejected each one.
//!
//! ```sh
//! cargo run --example registration
//! ```

use outcome_rail::prelude::*;
use outcome_rail::registration::{InMemoryNotifier, RegistrationPolicy, RegistrationService};

fn report(label: &str, out: Outcome<outcome_rail::registration::RegisteredUser>) {
    let line = out.match_with(
        |user| format!("ok       {} (hash {})", user.email, user.password_hash),
        |err| format!("rejected {err:#}"),
    );
    println!("{label:<22} {line}");
}

fn main() {
    let notifier = InMemoryNotifier::new();
    let service = RegistrationService::new(&notifier);

    println!("== default policy ==");
    let attempts = [
        ("valid", "TEST@GMAIL.COM", "Pass123!@#"),
        ("missing email", "   ", "Pass123!@#"),
        ("malformed email", "not-an-email", "Pass123!@#"),
        ("foreign domain", "someone@example.org", "Pass123!@#"),
        ("short password", "someone@outlook.com", "Ab1!"),
        ("weak password", "someone@yahoo.com", "password123"),
    ];
    for (label, email, password) in attempts {
        report(label, service.register(email, password));
    }
    println!("welcome emails sent: {}", notifier.sent_count());

    println!();
    println!("== collaborator failures ==");
    let offline = InMemoryNotifier::new().unavailable();
    report("service offline", RegistrationService::new(&offline).register("a@gmail.com", "Pass123!@#"));

    let strict = InMemoryNotifier::new().rejecting_templates();
    report("template rejected", RegistrationService::new(&strict).register("a@gmail.com", "Pass123!@#"));

    let flaky = InMemoryNotifier::new().failing_delivery();
    report("delivery failed", RegistrationService::new(&flaky).register("a@gmail.com", "Pass123!@#"));

    println!();
    println!("== custom policy ==");
    let policy = RegistrationPolicy::with_domains(["example.org"]).min_password_length(12);
    let corporate = RegistrationService::new(&notifier).with_policy(policy);
    report("corporate short", corporate.register("dev@example.org", "Pass123!@#"));
    report("corporate ok", corporate.register("dev@example.org", "Longer-Pass123"));

    let emails: Outcome<Vec<String>> = ["x@gmail.com", "bad", "y@gmail.com"]
        .into_iter()
        .map(|email| service.register(email, "Pass123!@#").map(|user| user.email))
        .collect();
    println!();
    println!("batch stops at first failure: {}", emails.match_with(|v| v.join(", "), |e| e.to_string()));
}
