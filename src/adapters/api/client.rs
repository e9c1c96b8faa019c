//! HTTP probe client
//!
//! Executes single request/response probes against the EbookAura API.
//! Every failure inside one probe's execution (transport error, unreadable
//! body) is caught and converted into a failed [`ProbeOutcome`]; nothing
//! propagates to the caller.

use crate::config::ApiConfig;
use crate::domain::{AuraError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;

use super::session::ProbeSession;

/// HTTP verb of a probe
///
/// Only the verbs the probe script issues are representable; an unknown
/// verb cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One scripted request/response exchange
#[derive(Debug, Clone)]
pub struct Probe {
    /// Human-readable name printed with the result
    pub name: String,
    pub method: ProbeMethod,
    /// Path relative to the versioned prefix, e.g. `/books`
    pub path: String,
    /// Attach session secrets as headers when present
    pub auth: bool,
    /// JSON body for mutating verbs
    pub payload: Option<Value>,
}

impl Probe {
    /// GET probe without a body
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: ProbeMethod::Get,
            path: path.into(),
            auth: false,
            payload: None,
        }
    }

    /// POST probe with an optional JSON payload
    pub fn post(
        name: impl Into<String>,
        path: impl Into<String>,
        payload: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            method: ProbeMethod::Post,
            path: path.into(),
            auth: false,
            payload,
        }
    }

    /// Mark the probe as requiring authentication headers
    pub fn with_auth(mut self) -> Self {
        self.auth = true;
        self
    }
}

/// Result of one probe
///
/// Transient by design: used to decide success, print one line, and gate
/// dependent probes. Not retained in any collection.
#[derive(Debug)]
pub struct ProbeOutcome {
    pub name: String,
    pub success: bool,
    pub status: Option<u16>,
    pub body: Option<Value>,
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// Returns the parsed body only when the probe succeeded
    ///
    /// Callers use this to decide whether to proceed with dependent calls.
    pub fn body_on_success(&self) -> Option<&Value> {
        if self.success {
            self.body.as_ref()
        } else {
            None
        }
    }
}

/// Classify a status code: success iff in [200, 300)
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Sequential probe client for one base URL
pub struct ApiProber {
    http: Client,
    base_url: String,
    path_prefix: String,
    session: ProbeSession,
}

impl ApiProber {
    /// Build a prober from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AuraError::Api(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            path_prefix: config.path_prefix.clone(),
            session: ProbeSession::default(),
        })
    }

    /// Base URL plus versioned prefix, as printed in the run header
    pub fn target(&self) -> String {
        format!("{}{}", self.base_url, self.path_prefix)
    }

    /// Store login secrets for subsequent authenticated probes
    pub fn authenticate(&mut self, token: String, api_key: String) {
        self.session.authenticate(token, api_key);
    }

    /// True once a login has populated the session
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Execute one probe
    ///
    /// Never returns an error: transport failures and unreadable bodies are
    /// folded into a failed outcome so the scenario can continue.
    pub async fn execute(&self, probe: &Probe) -> ProbeOutcome {
        let url = format!("{}{}{}", self.base_url, self.path_prefix, probe.path);
        tracing::debug!(name = %probe.name, method = ?probe.method, url = %url, "Executing probe");

        match self.dispatch(probe, &url).await {
            Ok((status, body)) => ProbeOutcome {
                name: probe.name.clone(),
                success: is_success_status(status),
                status: Some(status),
                body: Some(body),
                error: None,
            },
            Err(e) => {
                tracing::debug!(name = %probe.name, error = %e, "Probe transport failure");
                ProbeOutcome {
                    name: probe.name.clone(),
                    success: false,
                    status: e.status().map(|s| s.as_u16()),
                    body: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn dispatch(
        &self,
        probe: &Probe,
        url: &str,
    ) -> std::result::Result<(u16, Value), reqwest::Error> {
        let mut request = match probe.method {
            ProbeMethod::Get => self.http.get(url),
            ProbeMethod::Post => self.http.post(url),
            ProbeMethod::Put => self.http.put(url),
            ProbeMethod::Delete => self.http.delete(url),
        };

        if probe.auth {
            if let Some((token, api_key)) = self.session.credentials() {
                request = request
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .header("X-API-Key", api_key);
            }
        }

        if let Some(payload) = &probe.payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        // JSON if parseable, else the raw text body
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        Ok((status, body))
    }
}
