//! Batch mode: filter a raw stats dump and write the filtered tree and its
//! structure next to each other as pretty-printed JSON.

use crate::error::{Error, Result};
use crate::projection::StatsFilter;
use crate::structure::generate_structure;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

pub const FILTERED_STATS_FILE: &str = "filteredStats.json";
pub const STRUCTURE_FILE: &str = "structure.json";

/// Output of one batch run
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub filtered: Value,
    pub structure: Value,
    pub filtered_path: PathBuf,
    pub structure_path: PathBuf,
}

/// Read a raw stats document
pub fn load_stats<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Filter `raw`, derive its structure, and write both into `output_dir`
pub fn save_stats_and_structure<P: AsRef<Path>>(
    raw: &Value,
    filter: &StatsFilter,
    output_dir: P,
) -> Result<Artifacts> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir).map_err(|source| Error::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let filtered = filter.apply(raw);
    let structure = generate_structure(&filtered);

    let filtered_path = output_dir.join(FILTERED_STATS_FILE);
    let structure_path = output_dir.join(STRUCTURE_FILE);
    write_pretty(&filtered_path, &filtered)?;
    write_pretty(&structure_path, &structure)?;

    info!(
        filtered = %filtered_path.display(),
        structure = %structure_path.display(),
        "files saved"
    );

    Ok(Artifacts {
        filtered,
        structure,
        filtered_path,
        structure_path,
    })
}

fn write_pretty(path: &Path, value: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use serde_json::json;

    #[test]
    fn test_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let raw = json!({
            "skywars": {"kills": 3, "coins": 100, "heads": 2},
            "duels": {"wins": 1, "losses": 2, "coins": 9},
            "arcade": {"coins": 5}
        });

        let artifacts = save_stats_and_structure(&raw, &FilterConfig::default().filter(), dir.path()).unwrap();

        assert_eq!(artifacts.filtered, json!({"skywars": {"kills": 3}, "duels": {"wins": 1, "losses": 2}}));
        assert_eq!(
            artifacts.structure,
            json!({"skywars": {"__keys": ["kills"]}, "duels": {"__keys": ["wins", "losses"]}})
        );

        let written = load_stats(dir.path().join(FILTERED_STATS_FILE)).unwrap();
        assert_eq!(written, artifacts.filtered);
        let written = load_stats(&artifacts.structure_path).unwrap();
        assert_eq!(written, artifacts.structure);
    }

    #[test]
    fn test_written_files_keep_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let raw: Value = serde_json::from_str(r#"{"pit": {"kills": 1}, "bedwars": {"wins": 2, "kills": 3}}"#).unwrap();

        save_stats_and_structure(&raw, &FilterConfig::default().filter(), dir.path()).unwrap();

        let text = std::fs::read_to_string(dir.path().join(FILTERED_STATS_FILE)).unwrap();
        let pit = text.find("\"pit\"").unwrap();
        let bedwars = text.find("\"bedwars\"").unwrap();
        let wins = text.find("\"wins\"").unwrap();
        let kills = text.rfind("\"kills\"").unwrap();
        assert!(pit < bedwars);
        assert!(wins < kills);
    }

    #[test]
    fn test_load_stats_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_stats(dir.path().join("playerStats.json")).unwrap_err();
        assert!(matches!(missing, Error::Io { .. }));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{").unwrap();
        assert!(matches!(load_stats(&bad).unwrap_err(), Error::Json { .. }));
    }
}
