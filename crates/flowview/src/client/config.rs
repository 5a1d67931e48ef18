use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://localhost:9000";

/// Agent runs can take minutes, mostly waiting on the LLM
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub host: String,
    pub timeout: Duration,
}

impl OrchestratorConfig {
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for an endpoint path such as `/supervisor`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), path)
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}
