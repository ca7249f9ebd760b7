// This code was automatically generated by idgen. Do not edit manually.
// Identifier: shop::orders::OrderId

impl OrderId {
    /// The empty identifier, equal to the default value.
    pub const EMPTY: Self = Self(0);
    /// Returns the empty identifier.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }
    /// Wraps a raw value as an identifier.
    #[must_use]
    pub const fn with(value: i64) -> Self {
        Self(value)
    }
}
impl ::core::clone::Clone for OrderId {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl ::core::marker::Copy for OrderId {}
impl ::core::default::Default for OrderId {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}
impl ::core::cmp::PartialEq for OrderId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl ::core::cmp::Eq for OrderId {}
impl ::core::cmp::PartialOrd for OrderId {
    #[inline]
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> ::core::option::Option<::core::cmp::Ordering> {
        ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
    }
}
impl ::core::cmp::Ord for OrderId {
    #[inline]
    fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
        ::core::cmp::Ord::cmp(&self.0, &other.0)
    }
}
impl ::core::hash::Hash for OrderId {
    #[inline]
    fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
        ::core::hash::Hash::hash(&self.0, state);
    }
}
impl ::core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        ::core::fmt::Display::fmt(&self.0, f)
    }
}
impl ::core::fmt::Debug for OrderId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        ::core::fmt::Display::fmt(&self.0, f)
    }
}
impl ::core::convert::From<i64> for OrderId {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}
impl ::core::convert::From<OrderId> for i64 {
    #[inline]
    fn from(value: OrderId) -> Self {
        value.0
    }
}
