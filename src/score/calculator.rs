//! Ranking score calculation
//!
//! Missing namespaces and fields count as 0. The SkyWars and BedWars terms
//! divide by `playedGames` without any guard: with no games played (or the
//! namespace missing) the term and the total become NaN or infinite, and
//! that value is returned as-is so callers can report the score as
//! unavailable.

use crate::score::weights::ScoreWeights;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Per-namespace parts of a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skywars: f64,
    pub bedwars: f64,
    pub duels: f64,
    pub pit: f64,
    /// `skywars / (skywars.playedGames * skywars_games)`
    pub skywars_term: f64,
    /// `bedwars / (bedwars.playedGames * bedwars_games)`
    pub bedwars_term: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn is_finite(&self) -> bool {
        self.total.is_finite()
    }
}

/// Compute the ranking score of a filtered stats tree
pub fn calculate_score(stats: &Value, weights: &ScoreWeights) -> f64 {
    calculate_breakdown(stats, weights).total
}

/// Compute the score together with its per-namespace parts
pub fn calculate_breakdown(stats: &Value, weights: &ScoreWeights) -> ScoreBreakdown {
    let skywars = Namespace::new(stats, "skywars");
    let bedwars = Namespace::new(stats, "bedwars");
    let duels = Namespace::new(stats, "duels");
    let pit = Namespace::new(stats, "pit");

    let skywars_sub = skywars.get("kills") * weights.kill
        + skywars.get("wins") * weights.win
        - skywars.get("losses") * weights.loss
        - skywars.get("deaths") * weights.death
        + skywars.get("level") * weights.level;

    let bedwars_sub = bedwars.get("kills") * weights.kill
        + bedwars.get("finalKills") * weights.final_kill
        - bedwars.get("finalDeaths") * weights.final_death
        + bedwars.get("wins") * weights.win
        - bedwars.get("losses") * weights.loss
        - bedwars.get("deaths") * weights.death
        + bedwars.beds("broken", "bedsBroken") * weights.bed
        - bedwars.beds("lost", "bedsLost") * weights.bed
        + bedwars.get("level") * weights.level;

    let duels_sub = duels.get("wins") * weights.win - duels.get("losses") * weights.loss;

    let pit_sub = pit.get("kills") * weights.kill
        + pit.get("assists") * weights.assist
        - pit.get("deaths") * weights.death
        + pit.get("damageDealt") * weights.damage_dealt
        - pit.get("damageReceived") * weights.damage_received
        + pit.get("meleeAccuracy") * weights.melee_accuracy;

    let skywars_term = skywars_sub / (skywars.get("playedGames") * weights.skywars_games);
    let bedwars_term = bedwars_sub / (bedwars.get("playedGames") * weights.bedwars_games);
    let total = skywars_term + bedwars_term + duels_sub + pit_sub;

    if !total.is_finite() {
        warn!(skywars_term, bedwars_term, "score is not finite");
    }

    ScoreBreakdown {
        skywars: skywars_sub,
        bedwars: bedwars_sub,
        duels: duels_sub,
        pit: pit_sub,
        skywars_term,
        bedwars_term,
        total,
    }
}

/// Lookup helper over one top-level namespace
struct Namespace<'a> {
    node: Option<&'a Value>,
}

impl<'a> Namespace<'a> {
    fn new(stats: &'a Value, name: &str) -> Self {
        Namespace { node: stats.get(name) }
    }

    fn get(&self, field: &str) -> f64 {
        self.node.and_then(|n| n.get(field)).map(coerce).unwrap_or(0.0)
    }

    /// Bed counters live under `beds.<nested>`, older dumps use a flat key
    fn beds(&self, nested: &str, flat: &str) -> f64 {
        let Some(node) = self.node else {
            return 0.0;
        };

        match node.get("beds").and_then(|beds| beds.get(nested)) {
            Some(value) => coerce(value),
            None => node.get(flat).map(coerce).unwrap_or(0.0),
        }
    }
}

/// Numeric value of a stats leaf; anything non-numeric counts as 0
fn coerce(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// A score as shown to players: floored, or a notice when unavailable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(pub f64);

impl Rating {
    pub fn value(&self) -> Option<i64> {
        if self.0.is_finite() {
            Some(self.0.floor() as i64)
        } else {
            None
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("Unable to calculate"),
        }
    }
}
