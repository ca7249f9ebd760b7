//! Test: Structs the generator would skip still compile with the marker.

use idgen_macros::identifier as id;

#[id]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legacy(i64);

#[id]
pub struct Named {
    pub value: i64,
}

fn main() {
    assert_eq!(Legacy(3), Legacy(3));
    let named = Named { value: 4 };
    assert_eq!(named.value, 4);
}
