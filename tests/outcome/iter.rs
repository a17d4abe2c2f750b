use std::cell::Cell;

use outcome_rail::{failure, success, Error, Outcome};

#[test]
fn iterators_yield_the_success_value_once() {
    let mut ok = Outcome::<i32, &str>::success(3);
    if let Some(value) = ok.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&4]);
    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![4]);

    let failed = Outcome::<i32, &str>::failure("x");
    assert_eq!(failed.iter().count(), 0);
    assert_eq!((&failed).into_iter().count(), 0);
}

#[test]
fn collecting_successes_gathers_all_values() {
    let items: Vec<Outcome<i32>> = vec![success(1), success(2), success(3)];
    let collected: Outcome<Vec<i32>> = items.into_iter().collect();
    assert_eq!(collected, success(vec![1, 2, 3]));
}

#[test]
fn collecting_stops_at_first_failure() {
    let items: Vec<Outcome<i32>> = vec![
        success(1),
        failure(Error::new("ERR_A")),
        success(3),
        failure(Error::new("ERR_B")),
    ];

    let collected: Outcome<Vec<i32>> = items.into_iter().collect();
    assert_eq!(collected.into_error(), Some(Error::new("ERR_A")));
}

#[test]
fn collecting_does_not_pull_past_the_failure() {
    let produced = Cell::new(0);
    let collected: Outcome<Vec<i32>> = (0..10)
        .map(|i| {
            produced.set(produced.get() + 1);
            if i == 2 { failure(Error::new("ERR_AT_2")) } else { success(i) }
        })
        .collect();

    assert!(collected.is_failure());
    assert_eq!(produced.get(), 3);
}

#[test]
fn collecting_into_custom_collection_type() {
    use smallvec::SmallVec;

    let items: Vec<Outcome<i32, &str>> = vec![success(1), success(2)];
    let collected: Outcome<SmallVec<[i32; 4]>, &str> = items.into_iter().collect();
    assert_eq!(collected.into_value().map(|v| v.len()), Some(2));
}

#[test]
fn collecting_empty_input_succeeds() {
    let items: Vec<Outcome<i32>> = Vec::new();
    let collected: Outcome<Vec<i32>> = items.into_iter().collect();
    assert_eq!(collected, success(Vec::new()));
}
