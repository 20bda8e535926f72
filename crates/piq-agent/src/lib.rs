//! # piq-agent
//!
//! Client for the remote research agent service.
//!
//! One call shape serves both searches: `POST <base_url>/agent/invoke` with a
//! prompt and an agent id. The reply is classified into an [`AgentOutcome`]
//! and then normalized into a typed [`Outcome`]:
//!
//! ```text
//! prompt ──► invoke ──► Envelope ──► AgentOutcome ──► Outcome<T>
//!                 └─ transport error ──┘
//! ```
//!
//! [`AgentClient::invoke`] never returns an error: transport problems become
//! [`Failure::Transport`](piq_core::outcome::Failure::Transport).

pub mod envelope;
pub mod normalize;
pub mod prompt;

mod error;
mod http;

use std::time::Duration;

use piq_config::AgentConfig;
use piq_core::entities::{IntelligenceReport, LeadFinderResult};
use piq_core::outcome::Outcome;
use piq_core::query::{IntelQuery, LeadQuery};

pub use envelope::{AgentOutcome, Envelope};
pub use error::AgentError;

use crate::envelope::InvokeRequest;
use crate::http::check_response;

const INVOKE_PATH: &str = "/agent/invoke";

/// HTTP client bound to one agent service.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl AgentClient {
    /// Build a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::NotConfigured`] for a blank `base_url`, or
    /// [`AgentError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str, api_key: Option<&str>, timeout_secs: u64) -> Result<Self, AgentError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(AgentError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("prospectiq/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{base_url}{INVOKE_PATH}"),
            api_key: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
            timeout_secs,
        })
    }

    /// # Errors
    ///
    /// Returns [`AgentError::NotConfigured`] when the config has no base URL.
    pub fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        if !config.is_configured() {
            return Err(AgentError::NotConfigured);
        }
        Self::new(
            &config.base_url,
            config.has_api_key().then_some(config.api_key.as_str()),
            config.timeout_secs,
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `message` to `agent_id` and return the decoded envelope.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] on network failure, timeout, non-success
    /// status, or an undecodable body.
    pub async fn send(&self, message: &str, agent_id: &str) -> Result<Envelope, AgentError> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&InvokeRequest { message, agent_id });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        tracing::debug!(agent_id, endpoint = %self.endpoint, "invoking agent");
        let resp = request.send().await.map_err(|error| self.classify(error))?;
        read_envelope(resp).await
    }

    /// Invoke an agent. Transport errors are folded into the outcome.
    pub async fn invoke(&self, message: &str, agent_id: &str) -> AgentOutcome {
        match self.send(message, agent_id).await {
            Ok(envelope) => {
                let outcome = AgentOutcome::from(envelope);
                if let AgentOutcome::Failure(failure) = &outcome {
                    tracing::info!(agent_id, %failure, "agent reported failure");
                }
                outcome
            }
            Err(error) => {
                tracing::warn!(agent_id, %error, "agent call failed");
                AgentOutcome::transport(&error.to_string())
            }
        }
    }

    /// Research one company.
    pub async fn research(&self, query: &IntelQuery, agent_id: &str) -> Outcome<IntelligenceReport> {
        self.invoke(&prompt::intel(query), agent_id).await.normalize()
    }

    /// Search for leads.
    pub async fn find_leads(&self, query: &LeadQuery, agent_id: &str) -> Outcome<LeadFinderResult> {
        self.invoke(&prompt::leads(query), agent_id).await.normalize()
    }

    fn classify(&self, error: reqwest::Error) -> AgentError {
        if error.is_timeout() {
            AgentError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            AgentError::Http(error)
        }
    }
}

/// Check the status and decode the body of an invoke response.
///
/// # Errors
///
/// Returns [`AgentError`] for a non-success status or a body that is not a
/// JSON envelope.
pub async fn read_envelope(resp: reqwest::Response) -> Result<Envelope, AgentError> {
    let resp = check_response(resp).await?;
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|error| AgentError::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        let client = AgentClient::new("https://agents.example.com/", None, 5).unwrap();
        assert_eq!(client.endpoint(), "https://agents.example.com/agent/invoke");
    }

    #[test]
    fn blank_base_url_is_not_configured() {
        assert!(matches!(AgentClient::new("  ", None, 5), Err(AgentError::NotConfigured)));
        assert!(matches!(
            AgentClient::from_config(&AgentConfig::default()),
            Err(AgentError::NotConfigured)
        ));
    }

    #[test]
    fn blank_api_key_is_dropped() {
        let client = AgentClient::new("https://agents.example.com", Some("  "), 5).unwrap();
        assert!(client.api_key.is_none());
    }

    #[tokio::test]
    async fn unreachable_service_is_transport_failure() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = AgentClient::new("http://127.0.0.1:9", None, 2).unwrap();
        let outcome = client.invoke("Research the company: Acme", "agent").await;
        assert!(matches!(
            outcome,
            AgentOutcome::Failure(ref failure) if failure.is_transport() && !failure.message().is_empty()
        ));
    }
}
