//! Test: The marker can be written as a full path next to other attributes.

mod shop {
    /// The id of a cart.
    #[idgen_macros::identifier]
    #[allow(dead_code)]
    pub struct CartId(pub(crate) i64);
}

fn main() {
    let _ = shop::CartId(1);
}
