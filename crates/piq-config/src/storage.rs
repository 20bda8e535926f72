//! Local persistence configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `<data_dir>/prospectiq`, or `.prospectiq/data` when the platform has no
/// data directory.
fn default_data_dir() -> String {
    dirs::data_dir().map_or_else(
        || String::from(".prospectiq/data"),
        |dir| dir.join("prospectiq").to_string_lossy().into_owned(),
    )
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the history files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_prospectiq_dir() {
        let config = StorageConfig::default();
        assert!(config.data_dir.contains("prospectiq"));
    }

    #[test]
    fn data_path_matches_setting() {
        let config = StorageConfig {
            data_dir: "/tmp/piq".into(),
        };
        assert_eq!(config.data_path(), PathBuf::from("/tmp/piq"));
    }
}
