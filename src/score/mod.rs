//! Weighted ranking score over the `skywars`, `bedwars`, `duels` and `pit`
//! namespaces of a filtered stats tree.

pub mod weights;
pub mod calculator;

pub use weights::ScoreWeights;
pub use calculator::{calculate_breakdown, calculate_score, Rating, ScoreBreakdown};
