use std::time::Duration;

use outcome_rail::async_ext::{FutureOutcomeExt, OutcomeFuture};
use outcome_rail::{Error, Outcome};

#[tokio::test]
async fn ok_future_resolves_to_success() {
    let out = async { Ok::<_, Error>(42) }.into_outcome().await;
    assert_eq!(out, Outcome::success(42));
}

#[tokio::test]
async fn err_future_resolves_to_failure() {
    let out = async { Err::<i32, _>(Error::new("QUOTA_001")) }.into_outcome().await;
    assert_eq!(out.error().map(Error::code), Some("QUOTA_001"));
}

#[tokio::test]
async fn wraps_only_after_inner_future_completes() {
    let out = OutcomeFuture::new(async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok::<_, &str>("done")
    })
    .await;
    assert_eq!(out.into_value(), Some("done"));
}
