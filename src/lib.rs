//! # Statsieve - Game Stats Projection and Scoring
//!
//! Prunes an arbitrarily shaped player stats tree down to the fields that
//! matter, fingerprints its key layout, and reduces it to one ranking score.
//!
//! ## Modules
//!
//! - **pattern**: dotted path patterns with `*` and `**` wildcards
//! - **projection**: include/omit filtering of JSON trees
//! - **structure**: key-name-only fingerprint of a tree
//! - **score**: weighted ranking score over the filtered tree
//! - **pipeline**: batch mode writing the filtered tree and its structure
//!
//! ## Quick Start
//!
//! ```rust
//! use statsieve::{FilterConfig, calculate_score, generate_structure};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "skywars": {"kills": 10, "wins": 2, "coins": 500, "playedGames": 4},
//!     "bedwars": {"wins": 1, "playedGames": 3},
//!     "arcade": {"coins": 20}
//! });
//!
//! let config = FilterConfig::default();
//! let filtered = config.filter().apply(&raw);
//! assert!(filtered.get("arcade").is_none());
//!
//! let structure = generate_structure(&filtered);
//! let score = calculate_score(&filtered, &config.weights);
//! # let _ = (structure, score);
//! ```

use once_cell::sync::Lazy;
use serde_json::Value;

pub mod config;
pub mod error;
pub mod pattern;
pub mod pipeline;
pub mod projection;
pub mod score;
pub mod structure;

// Re-export commonly used types for convenience
pub use config::FilterConfig;
pub use error::{Error, Result};
pub use pattern::{matches, PathPattern, PatternSet, Segment};
pub use pipeline::{load_stats, save_stats_and_structure, Artifacts};
pub use projection::{project, Mode, StatsFilter};
pub use score::{calculate_breakdown, calculate_score, Rating, ScoreBreakdown, ScoreWeights};
pub use structure::generate_structure;

/// Filter compiled from `FilterConfig::default()`
pub static DEFAULT_FILTER: Lazy<StatsFilter> = Lazy::new(|| FilterConfig::default().filter());

/// Main entry point: filter a raw stats tree and score it
pub fn rate_player(raw: &Value, filter: &StatsFilter, weights: &ScoreWeights) -> f64 {
    let filtered = filter.apply(raw);
    calculate_score(&filtered, weights)
}

/// Rate a raw stats tree with the default pattern lists and weights
pub fn rate_player_default(raw: &Value) -> Rating {
    Rating(rate_player(raw, &DEFAULT_FILTER, &ScoreWeights::default()))
}
