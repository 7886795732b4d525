//! Segment-by-segment matching of dotted paths against compiled patterns
//!
//! Matching is anchored at both ends. In non-strict mode pattern segments
//! beyond the depth of the path are skipped, so an ancestor such as
//! `skywars` matches `skywars.kills` and traversal can continue downward.
//! Strict mode requires every pattern segment to be satisfied.

use crate::pattern::segment::{PathPattern, Segment, SEPARATOR};

impl PathPattern {
    /// Test a dotted path against this pattern
    pub fn matches(&self, path: &str, strict: bool) -> bool {
        let path_segments: Vec<&str> = path.split(SEPARATOR).collect();
        self.matches_segments(&path_segments, strict)
    }

    /// Test an already split path against this pattern
    pub fn matches_segments(&self, path: &[&str], strict: bool) -> bool {
        let segments = self.segments();
        let effective = if strict {
            segments
        } else {
            &segments[..segments.len().min(path.len())]
        };

        match_from(effective, path)
    }
}

/// Match a dotted path against a dotted pattern string.
///
/// `strict = false` is the include rule, `strict = true` the omit rule.
pub fn matches(path: &str, pattern: &str, strict: bool) -> bool {
    PathPattern::parse(pattern).matches(path, strict)
}

fn match_from(pattern: &[Segment], path: &[&str]) -> bool {
    let Some((segment, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    match segment {
        // Try every possible remainder length, shortest first
        Segment::Multi => (0..=path.len()).any(|consumed| match_from(rest, &path[consumed..])),
        Segment::Single => match path.split_first() {
            Some((head, tail)) => !head.is_empty() && match_from(rest, tail),
            None => false,
        },
        Segment::Literal(text) => match path.split_first() {
            Some((head, tail)) => *head == text.as_str() && match_from(rest, tail),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", "a", true)]
    #[case("a.b", "a.b", true)]
    #[case("a.b", "a.c", false)]
    #[case("a.b", "a", false)]
    #[case("a", "a.b", false)]
    #[case("Skywars", "skywars", false)]
    #[case("a.b.c", "a.b.c", true)]
    #[case("a.b.c.d", "a.b.c.d", true)]
    #[case("a+b.(c)", "a+b.(c)", true)]
    #[case("a.b", "a.b.", false)]
    fn test_literal_patterns_strict(#[case] path: &str, #[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(matches(path, pattern, true), expected);
        // literal-only: match iff identical text
        assert_eq!(path == pattern, expected);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("a.b")]
    #[case("skywars.kills.total")]
    fn test_double_star_matches_everything(#[case] path: &str) {
        assert!(matches(path, "**", false));
        assert!(matches(path, "**", true));
    }

    #[rstest]
    #[case("a.x.c", true)]
    #[case("a.long-segment.c", true)]
    #[case("a..c", false)]
    #[case("a.x.y.c", false)]
    #[case("a.c", false)]
    #[case("b.x.c", false)]
    #[case("a.x.d", false)]
    #[case("a.x.c.d", false)]
    fn test_single_star_strict(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(matches(path, "a.*.c", true), expected);
    }

    #[rstest]
    #[case("skywars.coins", true)]
    #[case("bedwars.beds.coins", true)]
    #[case("skywars.coinsTotal", false)]
    #[case("skywars.coins.total", false)]
    fn test_leading_double_star_strict(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(matches(path, "**.coins", true), expected);
    }

    #[test]
    fn test_trailing_double_star_requires_whole_prefix_segment() {
        assert!(matches("skywars", "skywars.**", true));
        assert!(matches("skywars.kills", "skywars.**", true));
        assert!(matches("skywars.a.b.c", "skywars.**", true));
        assert!(!matches("skywarsX", "skywars.**", true));
        assert!(!matches("bedwars.kills", "skywars.**", true));
    }

    #[test]
    fn test_non_strict_skips_deeper_pattern_segments() {
        assert!(matches("duels", "duels.wins", false));
        assert!(matches("duels.wins", "duels.wins", false));
        assert!(!matches("duels.kills", "duels.wins", false));
        assert!(!matches("pit", "duels.wins", false));
        assert!(matches("pit", "pit.*.x", false));
    }

    #[test]
    fn test_strict_does_not_skip() {
        assert!(!matches("duels", "duels.wins", true));
        assert!(!matches("a", "a.*", true));
        assert!(matches("a", "a.**", true));
    }

    #[test]
    fn test_non_strict_path_deeper_than_pattern() {
        // Skipping only applies to excess pattern segments
        assert!(!matches("duels.wins.total", "duels.wins", false));
        assert!(matches("bedwars.beds.broken", "bedwars.**", false));
    }

    #[test]
    fn test_double_star_in_middle() {
        assert!(matches("a.c", "a.**.c", true));
        assert!(matches("a.b.c", "a.**.c", true));
        assert!(matches("a.b.b.c", "a.**.c", true));
        assert!(!matches("a.b.d", "a.**.c", true));
    }

    #[test]
    fn test_single_separator_between_literals() {
        // Longer literal patterns must not require a doubled separator
        assert!(matches("a.b.c.d.e", "a.b.c.d.e", true));
        assert!(!matches("a.b..c.d.e", "a.b.c.d.e", true));
    }

    #[test]
    fn test_compiled_pattern_is_reusable() {
        let pattern = PathPattern::parse("*.kills");
        assert!(pattern.matches("skywars.kills", true));
        assert!(pattern.matches("pit.kills", true));
        assert!(!pattern.matches("kills", true));
        assert!(pattern.matches_segments(&["bedwars", "kills"], true));
    }
}
