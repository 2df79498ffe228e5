//! Path matching logic.
//!
//! # Responsibilities
//! - Wildcard suffix (`/apps/chat/*`): prefix test on the stripped base
//! - Literal and `:param` segments: same segment count, segment-wise compare
//!
//! # Design Decisions
//! - Wildcard is checked first, then segments
//! - Wildcard is a byte prefix test: `/apps/chat/*` matches `/apps/chat`
//!   and also `/apps/chatroom`
//! - Matching is case-sensitive
//! - Total: never panics, any string is a valid input
//! - No regex to guarantee O(n) matching

use crate::routing::pattern::{PathPattern, Segment};

/// Trait for matching a pathname against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the pathname matches this condition.
    fn matches(&self, pathname: &str) -> bool;
}

impl Matcher for PathPattern {
    fn matches(&self, pathname: &str) -> bool {
        match self {
            PathPattern::WildcardSuffix { base } => pathname.starts_with(base.as_str()),
            PathPattern::Segments(segments) => {
                let candidate: Vec<&str> = pathname.split('/').collect();
                if candidate.len() != segments.len() {
                    return false;
                }
                segments.iter().zip(candidate).all(|(seg, value)| match seg {
                    Segment::Param(_) => !value.is_empty(),
                    Segment::Literal(lit) => lit == value,
                })
            }
        }
    }
}

/// Match `candidate` against an uncompiled `pattern`.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    PathPattern::parse(pattern).matches(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_literal_match() {
        assert!(matches("/admin/users", "/admin/users"));
        assert!(!matches("/admin/users", "/admin/users/1"));
        assert!(!matches("/admin/users", "/admin/Users"));
        assert!(matches("/", "/"));
        assert!(!matches("/", "/dashboard"));
    }

    #[test]
    fn test_param_same_length_only() {
        assert!(matches("/users/:id", "/users/42"));
        assert!(!matches("/users/:id", "/users/42/edit"));
        assert!(matches("/users/:id/edit", "/users/42/edit"));
        assert!(!matches("/users/:id/edit", "/users/42/view"));
    }

    #[test]
    fn test_param_requires_non_empty_segment() {
        assert!(!matches("/users/:id", "/users/"));
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        assert!(!matches("/users", "/users/"));
    }

    #[test]
    fn test_wildcard_prefix() {
        assert!(matches("/apps/chat/*", "/apps/chat/thread/7"));
        assert!(!matches("/apps/other/*", "/apps/chat"));
        assert!(!matches("/apps/chat/*", "/apps/other"));
    }

    #[test]
    fn test_wildcard_boundary_matches_base_itself() {
        // The stripped base is a prefix of itself.
        assert!(matches("/apps/chat/*", "/apps/chat"));
        // Plain prefix test, not segment-aware.
        assert!(matches("/apps/chat/*", "/apps/chatroom"));
    }

    #[test]
    fn test_root_wildcard_matches_everything() {
        assert!(matches("/*", "/anything/at/all"));
        assert!(matches("/*", ""));
    }

    proptest! {
        #[test]
        fn prop_matches_is_total(pattern in ".*", candidate in ".*") {
            let _ = matches(&pattern, &candidate);
        }

        #[test]
        fn prop_literal_matches_itself(path in "(/[a-z0-9]{1,8}){0,5}") {
            prop_assert!(matches(&path, &path));
        }

        #[test]
        fn prop_wildcard_matches_any_extension(base in "(/[a-z]{1,6}){0,4}", rest in ".*") {
            let pattern = format!("{base}/*");
            let candidate = format!("{base}{rest}");
            prop_assert!(matches(&pattern, &candidate));
        }
    }
}
