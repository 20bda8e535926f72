use anyhow::Context;
use piq_agent::AgentClient;
use piq_config::PiqConfig;
use piq_history::{FileStorage, IntelHistory, LeadHistory};
use piq_view::state::AppState;

/// Everything a command needs: configuration, the two search surfaces and
/// both history stores.
pub struct AppContext {
    pub config: PiqConfig,
    pub state: AppState,
    pub intel_history: IntelHistory<FileStorage>,
    pub lead_history: LeadHistory<FileStorage>,
}

impl AppContext {
    /// Open both histories under the configured data directory. Unreadable
    /// history starts empty.
    #[must_use]
    pub fn init(config: PiqConfig) -> Self {
        let storage = FileStorage::new(config.storage.data_path());
        tracing::debug!(dir = %storage.dir().display(), "history directory");
        Self::with_storage(config, storage)
    }

    #[must_use]
    pub fn with_storage(config: PiqConfig, storage: FileStorage) -> Self {
        Self {
            intel_history: IntelHistory::open(storage.clone()),
            lead_history: LeadHistory::open(storage),
            state: AppState::new(),
            config,
        }
    }

    /// Build an agent client from `[agent]` config.
    ///
    /// # Errors
    ///
    /// Fails when no agent endpoint is configured.
    pub fn agent(&self) -> anyhow::Result<AgentClient> {
        AgentClient::from_config(&self.config.agent)
            .context("agent is not configured; set PROSPECTIQ_AGENT__BASE_URL")
    }
}
