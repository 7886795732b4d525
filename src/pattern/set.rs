use crate::pattern::segment::{PathPattern, SEPARATOR};
use tracing::trace;

/// A list of alternative patterns; a path matches the set if it matches any member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<PathPattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<PathPattern>) -> Self {
        PatternSet { patterns }
    }

    /// Compile every pattern string in order
    pub fn compile<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PatternSet {
            patterns: patterns
                .into_iter()
                .map(|p| PathPattern::parse(p.as_ref()))
                .collect(),
        }
    }

    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if `path` matches at least one pattern in the set
    pub fn matches_any(&self, path: &str, strict: bool) -> bool {
        let path_segments: Vec<&str> = path.split(SEPARATOR).collect();
        let hit = self
            .patterns
            .iter()
            .find(|pattern| pattern.matches_segments(&path_segments, strict));

        trace!(path, strict, pattern = ?hit.map(|p| p.to_string()), "pattern test");
        hit.is_some()
    }
}

impl FromIterator<PathPattern> for PatternSet {
    fn from_iter<T: IntoIterator<Item = PathPattern>>(iter: T) -> Self {
        PatternSet::new(iter.into_iter().collect())
    }
}
