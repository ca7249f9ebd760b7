//! Marker attribute matching.
//!
//! A declaration opts in with `#[identifier]`, exported by the
//! `idgen-macros` crate. Matching is purely syntactic: the scanner records
//! each attribute path as written and as resolved through the module's
//! `use` imports, and this module decides whether that path names the
//! marker.

use serde::{Deserialize, Serialize};

use crate::scanner::AttributeRef;

/// Simple name of the marker attribute.
pub const MARKER_NAME: &str = "identifier";

/// Fully qualified path of the marker attribute.
pub const MARKER_PATH: &str = "idgen_macros::identifier";

/// Simple names accepted by permissive matching.
const MARKER_SPELLINGS: &[&str] = &[MARKER_NAME, "Identifier"];

/// Conventional suffix tolerated by simple-name matching.
const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// How strictly attribute paths must name the marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPolicy {
    /// Match on the attribute's simple name (`identifier` or `Identifier`,
    /// with an optional `Attribute` suffix). Any crate's `identifier`
    /// attribute matches.
    #[default]
    Permissive,
    /// Require the resolved path to be exactly `idgen_macros::identifier`.
    Strict,
}

/// Matcher for the marker attribute under a given policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marker {
    policy: MarkerPolicy,
}

impl Marker {
    pub fn new(policy: MarkerPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MarkerPolicy {
        self.policy
    }

    /// Returns `true` if `attribute` names the marker.
    ///
    /// ## Examples
    ///
    /// ```
    /// use idgen_lib::{AttributeRef, Marker, MarkerPolicy};
    ///
    /// let bare = AttributeRef::new("identifier", "identifier");
    /// let imported = AttributeRef::new("identifier", "idgen_macros::identifier");
    ///
    /// assert!(Marker::new(MarkerPolicy::Permissive).matches(&bare));
    /// assert!(!Marker::new(MarkerPolicy::Strict).matches(&bare));
    /// assert!(Marker::new(MarkerPolicy::Strict).matches(&imported));
    /// ```
    pub fn matches(&self, attribute: &AttributeRef) -> bool {
        let resolved = attribute.resolved.trim_start_matches("::");
        match self.policy {
            MarkerPolicy::Strict => resolved == MARKER_PATH,
            MarkerPolicy::Permissive => {
                let simple = resolved.rsplit("::").next().unwrap_or(resolved);
                let simple = simple.trim_start_matches("r#");
                let simple = simple.strip_suffix(ATTRIBUTE_SUFFIX).unwrap_or(simple);
                MARKER_SPELLINGS.contains(&simple)
            }
        }
    }

    /// Returns `true` if any of `attributes` names the marker.
    pub fn is_marked(&self, attributes: &[AttributeRef]) -> bool {
        attributes.iter().any(|attribute| self.matches(attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(resolved: &str) -> AttributeRef {
        AttributeRef::new(resolved, resolved)
    }

    #[test]
    fn permissive_matches_simple_name_variants() {
        let marker = Marker::new(MarkerPolicy::Permissive);

        for path in [
            "identifier",
            "Identifier",
            "IdentifierAttribute",
            "idgen_macros::identifier",
            "::idgen_macros::identifier",
        ] {
            assert!(marker.matches(&attr(path)), "expected {} to match", path);
        }
    }

    #[test]
    fn permissive_matches_colliding_name_from_other_crate() {
        // simple-name matching cannot tell crates apart
        let marker = Marker::new(MarkerPolicy::Permissive);
        assert!(marker.matches(&attr("serde_ext::identifier")));
    }

    #[test]
    fn permissive_rejects_other_names() {
        let marker = Marker::new(MarkerPolicy::Permissive);

        for path in [
            "derive",
            "doc",
            "identifiers",
            "my_identifier",
            "identifier::other",
            "Attribute",
            "IDENTIFIER",
            "iDeNtIfIeRAttribute",
        ] {
            assert!(!marker.matches(&attr(path)), "expected {} not to match", path);
        }
    }

    #[test]
    fn strict_requires_full_path() {
        let marker = Marker::new(MarkerPolicy::Strict);

        assert!(marker.matches(&attr("idgen_macros::identifier")));
        assert!(marker.matches(&attr("::idgen_macros::identifier")));
        assert!(!marker.matches(&attr("identifier")));
        assert!(!marker.matches(&attr("serde_ext::identifier")));
    }

    #[test]
    fn strict_uses_resolved_path() {
        let marker = Marker::new(MarkerPolicy::Strict);
        let aliased = AttributeRef::new("id", "idgen_macros::identifier");
        assert!(marker.matches(&aliased));
    }

    #[test]
    fn is_marked_checks_any_attribute() {
        let marker = Marker::default();
        assert!(marker.is_marked(&[attr("doc"), attr("identifier")]));
        assert!(!marker.is_marked(&[attr("doc"), attr("derive")]));
        assert!(!marker.is_marked(&[]));
    }

    #[test]
    fn default_policy_is_permissive() {
        assert_eq!(Marker::default().policy(), MarkerPolicy::Permissive);
    }
}
