//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "WALLET_CLIENT_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Load from `WALLET_CLIENT_CONFIG` if set, defaults otherwise.
pub fn load_from_env() -> Result<ClientConfig, ConfigError> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => load_config(Path::new(&path)),
        Err(_) => Ok(ClientConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config(
            r#"
            [wallet]
            rpc_url = "http://127.0.0.1:8545"

            [[balance.endpoints]]
            name = "local"
            url = "http://127.0.0.1:8545"
            chain_id = 31337
            "#,
        )
        .unwrap();

        assert_eq!(config.wallet.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.balance.endpoints.len(), 1);
        assert_eq!(config.balance.endpoints[0].chain_id, Some(31337));
        assert_eq!(config.balance.display_decimals, 4);
        assert_eq!(config.transfer.base_gas, 21_000);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[balance\ntimeout_ms = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_reported() {
        let err = parse_config(
            r#"
            [balance]
            timeout_ms = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("balance.timeout_ms"));
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join("wallet_client_test_config.toml");
        std::fs::write(&path, "[observability]\nlog_level = \"debug\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.observability.log_level, "debug");

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/wallet-client.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
