//! Probe session state
//!
//! The two secrets obtained from a successful login. Both are unset at
//! start, set together on login success, never persisted, and discarded at
//! process exit.

/// In-memory session secrets for authenticated probes
#[derive(Debug, Default)]
pub struct ProbeSession {
    token: Option<String>,
    api_key: Option<String>,
}

impl ProbeSession {
    /// Store both secrets after a successful login
    pub fn authenticate(&mut self, token: String, api_key: String) {
        self.token = Some(token);
        self.api_key = Some(api_key);
    }

    /// Returns the bearer token and API key when both are present
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.token, &self.api_key) {
            (Some(token), Some(key)) => Some((token.as_str(), key.as_str())),
            _ => None,
        }
    }

    /// True once a login has populated both secrets
    pub fn is_authenticated(&self) -> bool {
        self.credentials().is_some()
    }
}
