//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Use ANSI emphasis in terminal rendering.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert!(GeneralConfig::default().color);
    }
}
