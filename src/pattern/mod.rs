//! Dotted path patterns
//!
//! A pattern such as `skywars.**` or `*.kills` is compiled into a list of
//! segment matchers and tested against the dotted path of a node in a JSON
//! tree. `*` matches exactly one non-empty segment, `**` matches the rest
//! of the path (zero or more segments), anything else is a literal.

pub mod segment;
pub mod matcher;
pub mod set;

pub use segment::{PathPattern, Segment, SEPARATOR};
pub use matcher::matches;
pub use set::PatternSet;
