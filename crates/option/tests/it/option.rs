use maybe_option::{Nullable, maybe, none, some};
use serde_json::json;

#[test]
fn maybe_wraps_present_values() {
    for value in [0, 1, -1, i64::MAX] {
        assert_eq!(maybe(Some(value)), some(value));
    }
    assert_eq!(maybe(Some("")), some(""));
    assert_eq!(maybe(Some(false)), some(false));
}

#[test]
fn maybe_drops_null_values() {
    assert_eq!(maybe(None::<i64>), none());
    assert_eq!(maybe(json!(null)), none());
    assert_eq!(maybe(std::ptr::null::<u8>()), None);
}

#[test]
fn json_payloads_keep_falsy_values() {
    // only null is absent, `false`, `0` and `""` are values
    for value in [json!(false), json!(0), json!(""), json!([]), json!({})] {
        assert_eq!(maybe(value.clone()), Some(value));
    }
}

#[test]
fn nullable_is_implementable() {
    struct Handle(i32);

    impl Nullable for Handle {
        type Value = i32;

        fn into_option(self) -> Option<i32> {
            (self.0 >= 0).then_some(self.0)
        }
    }

    assert_eq!(maybe(Handle(3)), some(3));
    assert_eq!(maybe(Handle(-1)), none());
}
