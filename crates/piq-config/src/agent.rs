//! Remote agent service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Agent that researches a single company.
fn default_intel_agent_id() -> String {
    String::from("69a0047b5c89478b3d0771e1")
}

/// Agent that searches for leads. Shares the coordinator by default.
fn default_lead_agent_id() -> String {
    default_intel_agent_id()
}

/// Research calls fan out to several sub-agents and routinely take a minute.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentConfig {
    /// Base URL of the agent service (e.g. `https://agents.example.com`).
    #[serde(default)]
    pub base_url: String,

    /// Bearer token sent with every call. Optional.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_intel_agent_id")]
    pub intel_agent_id: String,

    #[serde(default = "default_lead_agent_id")]
    pub lead_agent_id: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            intel_agent_id: default_intel_agent_id(),
            lead_agent_id: default_lead_agent_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AgentConfig {
    /// Check if the agent endpoint is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Return `self` when usable, for callers that cannot proceed without it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `base_url` is empty.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: String::from("agent"),
            })
        }
    }
}
