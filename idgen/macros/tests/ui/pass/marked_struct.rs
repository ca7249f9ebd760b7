//! Test: A marked newtype compiles and keeps its declared shape.

use idgen_macros::identifier;

#[identifier]
pub struct OrderId(i64);

fn main() {
    let id = OrderId(7);
    assert_eq!(id.0, 7);
}
