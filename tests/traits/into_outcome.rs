use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
use outcome_rail::{Error, Outcome};

#[test]
fn result_into_outcome_preserves_variant() {
    let ok: Outcome<i32, &str> = Ok(1).into_outcome();
    assert_eq!(ok.into_value(), Some(1));

    let err: Outcome<i32, &str> = Err("bad").into_outcome();
    assert_eq!(err.into_error(), Some("bad"));
}

#[test]
fn result_steps_plug_into_chains() {
    let out = Outcome::<&str, std::num::ParseIntError>::success("21")
        .on_success(|s| s.parse::<i32>().into_outcome())
        .map(|n| n * 2);
    assert_eq!(out.into_value(), Some(42));
}

#[test]
fn option_ok_or_failure() {
    let some: Outcome<i32> = Some(1).ok_or_failure(Error::new("ERR_404"));
    assert!(some.is_success());

    let none: Outcome<i32> = None.ok_or_failure(Error::new("ERR_404"));
    assert_eq!(none.error().map(Error::code), Some("ERR_404"));
}

#[test]
fn option_ok_or_failure_with_is_lazy() {
    let mut built = 0;
    let _: Outcome<i32> = Some(1).ok_or_failure_with(|| {
        built += 1;
        Error::new("ERR_404")
    });
    let _: Outcome<i32> = None.ok_or_failure_with(|| {
        built += 1;
        Error::new("ERR_404")
    });
    assert_eq!(built, 1);
}
