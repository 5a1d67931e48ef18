use thiserror::Error;

pub const ENV_PREFIX: &str = "FLOWVIEW";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {env_var}")]
    InvalidEnvVar { env_var: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Environment variable that sets a dotted configuration key, e.g.
/// `orchestrator.host` -> `FLOWVIEW_ORCHESTRATOR__HOST`
pub fn to_env_var(field: &str) -> String {
    format!("{}_{}", ENV_PREFIX, field.replace('.', "__").to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_env_var() {
        assert_eq!(to_env_var("orchestrator.host"), "FLOWVIEW_ORCHESTRATOR__HOST");
        assert_eq!(
            to_env_var("orchestrator.timeout_secs"),
            "FLOWVIEW_ORCHESTRATOR__TIMEOUT_SECS"
        );
        assert_eq!(to_env_var("display"), "FLOWVIEW_DISPLAY");
    }
}
