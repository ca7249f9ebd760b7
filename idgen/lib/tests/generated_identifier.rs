//! Behavior of the generated identifier API.
//!
//! The checked-in unit under `fixtures/generated` is compiled into this test
//! next to a marked declaration, exactly as a user crate would include it,
//! and compared against what the generator renders today.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use idgen_lib::{GeneratorConfig, ModulePath, SourceFile, generate, scan_source};
use proptest::prelude::*;

mod shop {
    pub mod orders {
        #[idgen_macros::identifier]
        pub struct OrderId(i64);

        include!("fixtures/generated/shop/orders/OrderId.g.rs");
    }
}

use shop::orders::OrderId;

const CHECKED_IN_UNIT: &str = include_str!("fixtures/generated/shop/orders/OrderId.g.rs");

fn normalize(code: &str) -> String {
    prettyplease::unparse(&syn::parse_file(code).expect("unit should be valid Rust"))
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn checked_in_unit_matches_generator_output() {
    let source = SourceFile::new(
        "src/shop/orders.rs",
        ModulePath::parse("shop::orders"),
        "#[idgen_macros::identifier]\npub struct OrderId(i64);\n",
    );

    let candidates = scan_source(&source).unwrap();
    let units = generate(&candidates, &GeneratorConfig::new()).unwrap();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].key, "shop/orders/OrderId.g.rs");
    assert_eq!(normalize(&units[0].content), normalize(CHECKED_IN_UNIT));
}

#[test]
fn empty_equals_default_and_zero() {
    assert_eq!(OrderId::empty(), OrderId::with(0));
    assert_eq!(OrderId::default(), OrderId::with(0));
    assert_eq!(OrderId::EMPTY, OrderId::empty());
    assert_eq!(i64::from(OrderId::EMPTY), 0);
}

#[test]
fn display_matches_integer_formatting() {
    assert_eq!(OrderId::with(42).to_string(), "42");
    assert_eq!(OrderId::with(-42).to_string(), "-42");
    assert_eq!(OrderId::with(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(OrderId::with(i64::MAX).to_string(), "9223372036854775807");
}

#[test]
fn debug_prints_bare_value() {
    assert_eq!(format!("{:?}", OrderId::with(7)), "7");
}

#[test]
fn explicit_conversions() {
    let id: OrderId = 99_i64.into();
    let raw: i64 = id.into();

    assert_eq!(id, OrderId::with(99));
    assert_eq!(raw, 99);
}

#[test]
fn ids_sort_by_raw_value() {
    let mut ids = vec![OrderId::with(3), OrderId::with(-1), OrderId::with(2)];
    ids.sort();
    assert_eq!(ids, vec![OrderId::with(-1), OrderId::with(2), OrderId::with(3)]);

    assert!(OrderId::with(1) < OrderId::with(2));
    assert!(OrderId::with(2) >= OrderId::with(2));
    assert_eq!(OrderId::with(5).max(OrderId::with(9)), OrderId::with(9));
}

#[test]
fn ids_work_in_hash_sets() {
    let ids: HashSet<OrderId> = [1, 2, 2, 3, 1].into_iter().map(OrderId::with).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&OrderId::with(2)));
}

#[test]
fn ids_are_copy() {
    let id = OrderId::with(10);
    let copy = id;
    assert_eq!(id, copy);
}

proptest! {
    #[test]
    fn prop_raw_value_round_trips(v in any::<i64>()) {
        prop_assert_eq!(i64::from(OrderId::with(v)), v);
        prop_assert_eq!(OrderId::from(v), OrderId::with(v));
    }

    #[test]
    fn prop_equality_matches_raw(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(OrderId::with(a) == OrderId::with(b), a == b);
        prop_assert_eq!(OrderId::with(a) != OrderId::with(b), a != b);
    }

    #[test]
    fn prop_order_matches_raw(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(OrderId::with(a).cmp(&OrderId::with(b)), a.cmp(&b));
        prop_assert_eq!(OrderId::with(a) < OrderId::with(b), a < b);
        prop_assert_eq!(OrderId::with(a) > OrderId::with(b), a > b);
        prop_assert_eq!(OrderId::with(a) <= OrderId::with(b), a <= b);
        prop_assert_eq!(OrderId::with(a) >= OrderId::with(b), a >= b);
    }

    #[test]
    fn prop_display_is_decimal(v in any::<i64>()) {
        prop_assert_eq!(OrderId::with(v).to_string(), v.to_string());
    }

    #[test]
    fn prop_equal_ids_hash_equally(v in any::<i64>()) {
        prop_assert_eq!(hash_of(&OrderId::with(v)), hash_of(&OrderId::from(v)));
        prop_assert_eq!(hash_of(&OrderId::with(v)), hash_of(&v));
    }
}
