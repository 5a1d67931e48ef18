use std::time::Duration;

use config::{Config, Environment};
use flowview::client::config::{DEFAULT_HOST, DEFAULT_TIMEOUT};
use flowview::client::OrchestratorConfig;
use serde::Deserialize;

use crate::error::{to_env_var, ConfigError, ENV_PREFIX};

#[derive(Debug, Deserialize)]
pub struct OrchestratorSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OrchestratorSettings {
    pub fn into_config(self) -> OrchestratorConfig {
        OrchestratorConfig::new(self.host).with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Deserialize)]
pub struct DisplaySettings {
    /// Longer content and tool results are cut off when rendered
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub orchestrator: OrchestratorSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("orchestrator.host", default_host())?
            .set_default("orchestrator.timeout_secs", default_timeout_secs() as i64)?
            .set_default("display.max_chars", default_max_chars() as i64)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = match config.try_deserialize() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);
                if let config::ConfigError::Type { key: Some(key), .. } = &err {
                    return Err(ConfigError::InvalidEnvVar {
                        env_var: to_env_var(key),
                    });
                }
                return Err(ConfigError::Other(err));
            }
        };

        settings.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let host = &self.orchestrator.host;
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar {
                env_var: to_env_var("orchestrator.host"),
            });
        }
        if self.orchestrator.timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                env_var: to_env_var("orchestrator.timeout_secs"),
            });
        }
        if self.display.max_chars == 0 {
            return Err(ConfigError::InvalidEnvVar {
                env_var: to_env_var("display.max_chars"),
            });
        }
        Ok(self)
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_max_chars() -> usize {
    500
}
