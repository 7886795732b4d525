use std::fmt;

/// Separator between path and pattern segments
pub const SEPARATOR: &str = ".";

/// One compiled pattern segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Must equal the path segment exactly (case-sensitive)
    Literal(String),
    /// `*` - exactly one non-empty path segment
    Single,
    /// `**` - the remainder of the path, possibly empty
    Multi,
}

impl Segment {
    fn from_token(token: &str) -> Self {
        match token {
            "*" => Segment::Single,
            "**" => Segment::Multi,
            other => Segment::Literal(other.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Single => f.write_str("*"),
            Segment::Multi => f.write_str("**"),
        }
    }
}

/// A compiled dotted pattern, e.g. `bedwars.**` or `**.coins`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a dotted pattern string.
    ///
    /// Compilation never fails. Tokens like `a*` or `***` are literals, so a
    /// malformed pattern simply matches nothing it wasn't written to match.
    pub fn parse(pattern: &str) -> Self {
        PathPattern {
            segments: pattern.split(SEPARATOR).map(Segment::from_token).collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if the pattern has no wildcard segments
    pub fn is_literal(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Literal(_)))
    }
}

impl From<&str> for PathPattern {
    fn from(pattern: &str) -> Self {
        PathPattern::parse(pattern)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
