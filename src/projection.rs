//! Include/omit projection of arbitrary JSON trees
//!
//! Each pass rebuilds the tree from scratch; the input is never modified.
//! Mapping key order in the output follows the source mapping.

use crate::pattern::{PatternSet, SEPARATOR};
use serde_json::{Map, Value};
use tracing::debug;

/// Which way a pattern hit is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Keep entries whose path matches (non-strict, ancestors of a match are kept)
    Include,
    /// Drop entries whose path matches, together with their subtree (strict)
    Omit,
}

impl Mode {
    pub fn is_strict(self) -> bool {
        matches!(self, Mode::Omit)
    }
}

/// Project a tree through a pattern set.
///
/// Scalars pass through unchanged. Array elements are projected with the
/// path of the key holding the array; indices never become path segments.
pub fn project(tree: &Value, patterns: &PatternSet, mode: Mode) -> Value {
    let projector = Projector { patterns, mode };
    let mut path = Vec::new();
    projector.project_value(tree, &mut path)
}

struct Projector<'p> {
    patterns: &'p PatternSet,
    mode: Mode,
}

impl Projector<'_> {
    fn project_value<'a>(&self, value: &'a Value, path: &mut Vec<&'a str>) -> Value {
        match value {
            Value::Object(obj) => Value::Object(self.project_object(obj, path)),
            Value::Array(arr) => Value::Array(
                arr.iter()
                    .map(|item| self.project_value(item, path))
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }

    fn project_object<'a>(
        &self,
        obj: &'a Map<String, Value>,
        path: &mut Vec<&'a str>,
    ) -> Map<String, Value> {
        let mut projected = Map::new();

        for (key, value) in obj.iter() {
            path.push(key.as_str());
            let full_path = path.join(SEPARATOR);

            if self.keeps(&full_path) {
                projected.insert(key.clone(), self.project_value(value, path));
            }

            path.pop();
        }

        projected
    }

    fn keeps(&self, path: &str) -> bool {
        let hit = self.patterns.matches_any(path, self.mode.is_strict());
        match self.mode {
            Mode::Include => hit,
            Mode::Omit => !hit,
        }
    }
}

/// The two-pass filter used on raw stats: include first, then omit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsFilter {
    include: PatternSet,
    omit: PatternSet,
}

impl StatsFilter {
    pub fn new(include: PatternSet, omit: PatternSet) -> Self {
        StatsFilter { include, omit }
    }

    pub fn include(&self) -> &PatternSet {
        &self.include
    }

    pub fn omit(&self) -> &PatternSet {
        &self.omit
    }

    /// Run the include pass and then the omit pass over `raw`
    pub fn apply(&self, raw: &Value) -> Value {
        let included = project(raw, &self.include, Mode::Include);
        debug!(patterns = self.include.len(), keys = top_level_len(&included), "include pass done");

        let filtered = project(&included, &self.omit, Mode::Omit);
        debug!(patterns = self.omit.len(), keys = top_level_len(&filtered), "omit pass done");

        filtered
    }
}

fn top_level_len(value: &Value) -> usize {
    value.as_object().map(|obj| obj.len()).unwrap_or(0)
}
