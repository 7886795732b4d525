//! Filter and scoring configuration
//!
//! The pattern lists and weights are plain values handed to the engine.
//! `FilterConfig::default()` carries the lists used for Hypixel player stats.

use crate::error::{Error, Result};
use crate::pattern::PatternSet;
use crate::projection::StatsFilter;
use crate::score::ScoreWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fields selected from a raw stats tree
pub const DEFAULT_INCLUDE: &[&str] = &[
    "skywars.**",
    "bedwars.**",
    "duels.wins",
    "duels.losses",
    "pit.kills",
    "pit.deaths",
    "pit.assists",
    "pit.damageReceived",
    "pit.damageDealt",
    "pit.meleeAccuracy",
];

/// Fields pruned from the included tree
pub const DEFAULT_OMIT: &[&str] = &[
    "**.coins",
    "**.tokens",
    "**.souls",
    "**.packages",
    "bedwars.practice",
    "bedwars.totalSlumberTicket",
    "bedwars.slumberTickets",
    "bedwars.dream",
    "bedwars.castle",
    "**.avg",
    "bedwars.collectedItemsTotal",
    "**.experience",
    "**.prestige",
    "**.BLRatio",
    "**.winstreak",
    "skywars.heads",
    "skywars.levelFormatted",
    "skywars.prestigeIcon",
    "skywars.opals",
    "skywars.avarice",
    "skywars.tenacity",
    "skywars.shards",
    "skywars.angelOfDeathLevel",
    "skywars.shardsInMode",
    "**.normal",
    "**.insane",
    "**.mega",
    "**.lab",
    "skywars.levelProgress",
    "**.KDRatio",
    "**.WLRatio",
    "**.finalKDRatio",
];

/// Configuration for filtering and scoring a stats tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Include patterns (non-strict, ancestors of matches are kept)
    pub include: Vec<String>,

    /// Omit patterns (strict, applied after the include pass)
    pub omit: Vec<String>,

    /// Score multipliers
    pub weights: ScoreWeights,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            omit: DEFAULT_OMIT.iter().map(|s| s.to_string()).collect(),
            weights: ScoreWeights::default(),
        }
    }
}

impl FilterConfig {
    /// Load a JSON config file; missing fields fall back to the defaults
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FilterConfig = serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject empty pattern strings, which can only ever match an empty key
    pub fn validate(&self) -> Result<()> {
        for (list, patterns) in [("include", &self.include), ("omit", &self.omit)] {
            if let Some(idx) = patterns.iter().position(|p| p.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "{} pattern #{} is empty",
                    list, idx
                )));
            }
        }
        Ok(())
    }

    /// Compile the pattern lists into a two-pass filter
    pub fn filter(&self) -> StatsFilter {
        StatsFilter::new(
            PatternSet::compile(&self.include),
            PatternSet::compile(&self.omit),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_lists() {
        let config = FilterConfig::default();
        assert_eq!(config.include.len(), 10);
        assert_eq!(config.omit.len(), 32);
        assert_eq!(config.include[0], "skywars.**");
        assert_eq!(config.omit.last().map(String::as_str), Some("**.finalKDRatio"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_path_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"include": ["duels.**"], "weights": {{"win": 1}}}}"#).unwrap();

        let config = FilterConfig::from_path(file.path()).unwrap();
        assert_eq!(config.include, vec!["duels.**".to_string()]);
        assert_eq!(config.omit.len(), DEFAULT_OMIT.len());
        assert_eq!(config.weights.win, 1.0);
        assert_eq!(config.weights.loss, 0.5);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"omit": ["**.coins", " "]}}"#).unwrap();

        let err = FilterConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("omit pattern #1"));
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FilterConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = FilterConfig::from_path("/nonexistent/statsieve.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_filter_compiles_lists() {
        let filter = FilterConfig::default().filter();
        assert_eq!(filter.include().len(), 10);
        assert_eq!(filter.omit().len(), 32);
    }
}
