//! Compiled path patterns.
//!
//! Patterns are parsed once when a route is attached so that resolution on
//! every navigation only walks pre-split segments.

/// One segment of a non-wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the candidate segment byte-for-byte.
    Literal(String),
    /// `:name`, matches any non-empty candidate segment.
    Param(String),
}

/// A parsed route path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Trailing `/*`: prefix test against `base`.
    WildcardSuffix { base: String },
    /// Literal and `:param` segments, matched segment-for-segment.
    Segments(Vec<Segment>),
}

impl PathPattern {
    /// Parse a pattern. Total: every string yields a pattern.
    pub fn parse(pattern: &str) -> Self {
        if let Some(base) = pattern.strip_suffix("/*") {
            return PathPattern::WildcardSuffix {
                base: base.to_string(),
            };
        }

        let segments = pattern
            .split('/')
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(seg.to_string()),
            })
            .collect();

        PathPattern::Segments(segments)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, PathPattern::WildcardSuffix { .. })
    }

    /// Names of the `:param` segments, in order.
    pub fn param_names(&self) -> Vec<&str> {
        match self {
            PathPattern::WildcardSuffix { .. } => Vec::new(),
            PathPattern::Segments(segments) => segments
                .iter()
                .filter_map(|s| match s {
                    Segment::Param(name) => Some(name.as_str()),
                    Segment::Literal(_) => None,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(
            PathPattern::parse("/apps/chat/*"),
            PathPattern::WildcardSuffix {
                base: "/apps/chat".into()
            }
        );
        assert_eq!(
            PathPattern::parse("/*"),
            PathPattern::WildcardSuffix { base: String::new() }
        );
    }

    #[test]
    fn test_parse_segments() {
        let pattern = PathPattern::parse("/users/:id/edit");
        assert_eq!(
            pattern,
            PathPattern::Segments(vec![
                Segment::Literal(String::new()),
                Segment::Literal("users".into()),
                Segment::Param("id".into()),
                Segment::Literal("edit".into()),
            ])
        );
        assert_eq!(pattern.param_names(), vec!["id"]);
        assert!(!pattern.is_wildcard());
    }

    #[test]
    fn test_mid_path_star_is_literal() {
        let pattern = PathPattern::parse("/a/*/b");
        assert!(!pattern.is_wildcard());
    }
}
