use futures::future::join_all;
use maybe_option::{
    ConversionConfig, IntoAsyncOption, from_async_result, from_async_result_configured,
    from_async_result_with, from_future, from_future_configured, from_future_with,
    from_nullable_async_result, from_nullable_future, from_nullable_result, from_result, none,
    some,
};
use maybe_test_utils::{TestError, asynctest, delayed, rejected, resolved};
use serde_json::{Value, json};
use std::time::Duration;

asynctest!(resolves_to_some, async {
    assert_eq!(from_future(resolved(42)).await, some(42));
    assert_eq!(from_future(resolved(json!({ "a": 1 }))).await, some(json!({ "a": 1 })));
});

asynctest!(resolved_null_is_none, async {
    assert_eq!(from_nullable_future(resolved(None::<u32>)).await, none());
    assert_eq!(from_nullable_future(resolved(Value::Null)).await, none());
    assert_eq!(from_nullable_future(resolved(Some(42))).await, some(42));
});

asynctest!(rejection_is_swallowed_by_default, async {
    assert_eq!(from_future(rejected::<u32>("offline")).await, none());
    assert_eq!(from_future_with(rejected::<u32>("offline"), true).await, Ok(None));
});

asynctest!(rejection_propagates_unchanged, async {
    let err = from_future_with(rejected::<u32>("offline"), false).await.unwrap_err();
    assert_eq!(err, TestError::new("offline"));
    assert_eq!(err.to_string(), "rejected: offline");
});

asynctest!(waits_for_the_future_to_settle, async {
    let option = from_future(delayed(Ok(7), Duration::from_secs(30))).await;
    assert_eq!(option, some(7));

    let late = delayed(Err::<u8, _>(TestError::new("late")), Duration::from_secs(5));
    let err = from_future_with(late, false).await;
    assert_eq!(err, Err(TestError::new("late")));
});

asynctest!(independent_conversions_run_concurrently, async {
    let futures = (0..8u64).map(|i| {
        let result = if i % 2 == 0 { Ok(i) } else { Err(TestError::new("odd")) };
        from_future(delayed(result, Duration::from_millis(100 * (8 - i))))
    });
    let options = join_all(futures).await;
    assert_eq!(options, [some(0), none(), some(2), none(), some(4), none(), some(6), none()]);
});

asynctest!(configured_policy, async {
    let propagate = ConversionConfig { catch_error: false };
    let err = from_future_configured(rejected::<u8>("nope"), &propagate).await;
    assert_eq!(err, Err(TestError::new("nope")));

    let catch = ConversionConfig::default();
    let option = from_future_configured(rejected::<u8>("nope"), &catch).await;
    assert_eq!(option, Ok(None));

    let err = from_async_result_configured(rejected::<Result<u8, &str>>("down"), &propagate).await;
    assert_eq!(err, Err(TestError::new("down")));

    let option = from_async_result_configured(rejected::<Result<u8, &str>>("down"), &catch).await;
    assert_eq!(option, Ok(None));
});

#[test]
fn result_round_trip() {
    assert_eq!(from_result(Ok::<i32, String>(42)), some(42));
    assert_eq!(from_result(Err::<u32, _>("x".to_string())), none());

    assert_eq!(from_nullable_result(Ok::<_, String>(Some(42))), some(42));
    assert_eq!(from_nullable_result(Ok::<_, ()>(json!(null))), none());
}

asynctest!(async_results, async {
    assert_eq!(from_async_result(resolved(Ok::<_, &str>(42))).await, some(42));
    assert_eq!(from_async_result(resolved(Err::<u32, _>("My error"))).await, none());
    assert_eq!(from_async_result(rejected::<Result<u32, &str>>("down")).await, none());
    assert_eq!(from_nullable_async_result(resolved(Ok::<_, &str>(None::<u32>))).await, none());

    let err = from_async_result_with(rejected::<Result<u32, &str>>("down"), false).await;
    assert_eq!(err, Err(TestError::new("down")));

    let option = from_async_result_with(resolved(Err::<u32, _>("My error")), false).await;
    assert_eq!(option, Ok(None));
});

asynctest!(boxed_async_options, async {
    let pending = vec![
        resolved(1).into_async_option(),
        rejected::<i32>("x").into_async_option(),
        delayed(Ok(3), Duration::from_secs(1)).into_async_option(),
    ];
    assert_eq!(join_all(pending).await, [some(1), none(), some(3)]);
});
