use outcome_rail::{failure, success, Error, Outcome};

#[test]
fn success_and_failure_helpers_behave_as_expected() {
    let ok = Outcome::<i32, &str>::success(5);
    assert!(ok.is_success());
    assert!(!ok.is_failure());
    assert_eq!(ok.value(), Some(&5));
    assert_eq!(ok.error(), None);

    let failed = Outcome::<i32, &str>::failure("missing");
    assert!(failed.is_failure());
    assert_eq!(failed.value(), None);
    assert_eq!(failed.error(), Some(&"missing"));
}

#[test]
fn free_constructors_match_associated_ones() {
    assert_eq!(success::<_, Error>(1), Outcome::<i32>::success(1));
    assert_eq!(failure::<i32, _>(Error::new("E")), Outcome::failure(Error::new("E")));
}

#[test]
fn map_and_on_success_chain_success_values() {
    let out = Outcome::<i32, &str>::success(4)
        .map(|x| x * 2)
        .on_success(|x| if x == 8 { success(x + 1) } else { failure("unexpected") });

    assert_eq!(out.into_value(), Some(9));
}

#[test]
fn and_then_is_on_success() {
    let via_alias = Outcome::<i32, &str>::success(2).and_then(|x| success(x * 10));
    let via_bind = Outcome::<i32, &str>::success(2).on_success(|x| success(x * 10));
    assert_eq!(via_alias, via_bind);
}

#[test]
fn on_success_returns_step_result_without_rewrapping() {
    let step_result: Outcome<i32, &str> = failure("from step");
    let out = Outcome::<i32, &str>::success(1).on_success(|_| step_result);
    assert_eq!(out, failure("from step"));
}

#[test]
fn map_error_transforms_only_failures() {
    let failed = Outcome::<i32, &str>::failure("boom").map_error(|e| e.len());
    assert_eq!(failed.into_error(), Some(4));

    let ok = Outcome::<i32, &str>::success(1).map_error(|e| e.len());
    assert_eq!(ok.into_value(), Some(1));
}

#[test]
fn on_failure_recovers_and_skips_on_success() {
    let recovered = Outcome::<i32, &str>::failure("miss").on_failure(|_| success::<i32, ()>(0));
    assert_eq!(recovered, success(0));

    let mut called = false;
    let untouched = Outcome::<i32, &str>::success(3).or_else(|_| {
        called = true;
        success::<i32, &str>(0)
    });
    assert_eq!(untouched.into_value(), Some(3));
    assert!(!called);
}

#[test]
fn fallback_replaces_failures_only() {
    assert_eq!(Outcome::<i32, &str>::failure("x").fallback(7).into_value(), Some(7));
    assert_eq!(Outcome::<i32, &str>::success(1).fallback(7).into_value(), Some(1));
}

#[test]
fn ensure_moves_rejected_values_to_failure_track() {
    let kept: Outcome<i32> = success(10).ensure(|x| *x < 100, |_| Error::new("ERR_006"));
    assert_eq!(kept.into_value(), Some(10));

    let rejected: Outcome<i32> = success(150).ensure(|x| *x < 100, |x| {
        Error::with_message("ERR_006", format!("{x} is too large"))
    });
    assert_eq!(rejected.error().and_then(Error::message), Some("150 is too large"));
}

#[test]
fn ensure_skips_predicate_on_failure() {
    let mut checked = false;
    let out: Outcome<i32> = failure(Error::new("ERR_001")).ensure(
        |_| {
            checked = true;
            true
        },
        |_| Error::new("ERR_999"),
    );

    assert!(!checked);
    assert_eq!(out.error().map(Error::code), Some("ERR_001"));
}

#[test]
fn inspect_hooks_see_only_their_track() {
    let mut seen_values = Vec::new();
    let mut seen_errors = Vec::new();

    let _ = Outcome::<i32, &str>::success(1)
        .inspect(|v| seen_values.push(*v))
        .inspect_error(|e| seen_errors.push(*e));
    let _ = Outcome::<i32, &str>::failure("bad")
        .inspect(|v| seen_values.push(*v))
        .inspect_error(|e| seen_errors.push(*e));

    assert_eq!(seen_values, vec![1]);
    assert_eq!(seen_errors, vec!["bad"]);
}

#[test]
fn value_or_variants_fall_back_on_failure() {
    assert_eq!(Outcome::<i32, &str>::failure("x").value_or(5), 5);
    assert_eq!(Outcome::<usize, &str>::failure("four").value_or_else(str::len), 4);
    assert_eq!(Outcome::<i32, &str>::success(1).value_or(5), 1);
}

#[test]
fn as_ref_and_as_mut_borrow_the_live_slot() {
    let mut out = Outcome::<String, &str>::success("a".to_string());
    if let Outcome::Success(value) = out.as_mut() {
        value.push('b');
    }
    assert_eq!(out.as_ref().into_value().map(String::as_str), Some("ab"));
}

#[test]
fn result_round_trips_through_outcome() {
    let out: Outcome<i32, &str> = Ok(3).into();
    assert_eq!(out, success(3));

    let out: Outcome<i32, &str> = Err("bad").into();
    let back: Result<i32, &str> = out.into();
    assert_eq!(back, Err("bad"));
}

#[test]
fn flatten_removes_one_level() {
    let nested: Outcome<Outcome<i32, &str>, &str> = success(success(2));
    assert_eq!(nested.flatten(), success(2));

    let inner_failure: Outcome<Outcome<i32, &str>, &str> = success(failure("inner"));
    assert_eq!(inner_failure.flatten(), failure("inner"));
}

#[test]
fn outcome_is_send_and_sync_when_payloads_are() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome<String, Error>>();
}
