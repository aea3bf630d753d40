//! HTTP joke source backed by a blocking `ureq` agent.
//!
//! # Responsibility
//! - Issue `GET <endpoint>` with `Accept: application/json`.
//! - Map `ureq` failures onto `SourceError` variants.

use crate::config::{ConfigError, JokeListConfig};
use crate::model::joke::JokePayload;
use crate::source::{JokeSource, SourceError, SourceResult};
use log::debug;
use std::time::Duration;

/// Joke source that talks to an icanhazdadjoke-compatible endpoint.
pub struct HttpJokeSource {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpJokeSource {
    /// Builds a source from validated configuration.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config.validate()` fails.
    pub fn from_config(config: &JokeListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let timeout = Duration::from_millis(config.timeout_ms);
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(config.user_agent.as_str())
            .build();
        Ok(Self {
            agent,
            endpoint: config.endpoint.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

impl JokeSource for HttpJokeSource {
    fn fetch_joke(&self) -> SourceResult<JokePayload> {
        let response = self
            .agent
            .get(self.endpoint.as_str())
            .set("Accept", "application/json")
            .call()
            .map_err(source_error_from_ureq)?;

        // ureq reports 4xx/5xx as errors, but 1xx/3xx can still land here.
        let status = response.status();
        if !(200..=299).contains(&status) {
            return Err(SourceError::Status(status));
        }

        let payload: JokePayload = serde_json::from_reader(response.into_reader())
            .map_err(|err| SourceError::Parse(err.to_string()))?;
        debug!(
            "event=joke_received module=source status=ok id={}",
            payload.id
        );
        Ok(payload)
    }
}

fn source_error_from_ureq(err: ureq::Error) -> SourceError {
    match err {
        ureq::Error::Status(code, _) => SourceError::Status(code),
        ureq::Error::Transport(transport) => SourceError::Transport(format!(
            "{} ({})",
            transport,
            classify_transport_kind(&format!("{:?}", transport.kind()))
        )),
    }
}

fn classify_transport_kind(raw: &str) -> &'static str {
    let lower = raw.to_ascii_lowercase();
    if lower.contains("timeout") || lower.contains("timedout") {
        "timeout"
    } else if lower.contains("dns") {
        "dns"
    } else if lower.contains("tls") || lower.contains("ssl") {
        "tls"
    } else if lower.contains("connection") || lower.contains("connect") {
        "connection"
    } else {
        "transport"
    }
}
