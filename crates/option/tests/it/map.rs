use maybe_option::{Mapped, flatten, map, map_or, maybe, none, some, unwrap_or, unwrap_or_else};

#[test]
fn map_transforms_and_flat_maps() {
    assert_eq!(map(some(42), |x| Mapped::Value(x * 2)), some(84));
    assert_eq!(map(none::<i32>(), |x| Mapped::Value(x * 2)), none());
    assert_eq!(map(some(42), |_| Mapped::<i32>::Option(none())), none());
    assert_eq!(map(some(42), |x| Mapped::Option(maybe(Some(x * 2)))), some(84));
}

#[test]
fn map_chains() {
    let parse = |s: &str| Mapped::from(s.parse::<u32>().ok());
    let half = |n: u32| if n % 2 == 0 { Mapped::Value(n / 2) } else { Mapped::Option(None) };

    assert_eq!(map(map(some("84"), parse), half), some(42));
    assert_eq!(map(map(some("85"), parse), half), none());
    assert_eq!(map(map(some("x"), parse), half), none());
}

#[test]
fn map_or_picks_a_branch() {
    assert_eq!(map_or(some(42), |x| x * 2, || 0), 84);
    assert_eq!(map_or(none(), |x: i32| x * 2, || 0), 0);
    assert_eq!(map_or(some("abc"), str::len, || 0), 3);
}

#[test]
fn flatten_one_level() {
    assert_eq!(flatten(some(some(42))), some(42));
    assert_eq!(flatten(none::<Option<u8>>()), none());
    assert_eq!(flatten(some(none::<u8>())), none());
}

#[test]
fn unwrap_with_defaults() {
    assert_eq!(unwrap_or(some(42), 0), 42);
    assert_eq!(unwrap_or(none(), 0), 0);
    assert_eq!(unwrap_or_else(none(), || 0), 0);
    assert_eq!(unwrap_or_else(some(42), || unreachable!("default must not run")), 42);
}
