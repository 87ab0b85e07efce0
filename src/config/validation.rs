//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs and value ranges (timeouts > 0, precision ≤ 18)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::codec::units::NATIVE_DECIMALS;
use crate::config::schema::ClientConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if url::Url::parse(&config.wallet.rpc_url).is_err() {
        errors.push(ValidationError::new("wallet.rpc_url", "not a valid URL"));
    }
    if config.wallet.private_key_env.is_empty() {
        errors.push(ValidationError::new("wallet.private_key_env", "must not be empty"));
    }
    if config.wallet.activation_timeout_secs == 0 {
        errors.push(ValidationError::new("wallet.activation_timeout_secs", "must be > 0"));
    }

    for (i, endpoint) in config.balance.endpoints.iter().enumerate() {
        if endpoint.name.is_empty() {
            errors.push(ValidationError::new(format!("balance.endpoints[{}].name", i), "must not be empty"));
        }
        if url::Url::parse(&endpoint.url).is_err() {
            errors.push(ValidationError::new(format!("balance.endpoints[{}].url", i), "not a valid URL"));
        }
    }
    if config.balance.timeout_ms == 0 {
        errors.push(ValidationError::new("balance.timeout_ms", "must be > 0"));
    }
    if config.balance.display_decimals > NATIVE_DECIMALS {
        errors.push(ValidationError::new(
            "balance.display_decimals",
            format!("must be <= {}", NATIVE_DECIMALS),
        ));
    }

    if config.transfer.base_gas == 0 {
        errors.push(ValidationError::new("transfer.base_gas", "must be > 0"));
    }
    if config.transfer.poll_interval_ms == 0 {
        errors.push(ValidationError::new("transfer.poll_interval_ms", "must be > 0"));
    }
    if config.transfer.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new("transfer.confirmation_timeout_secs", "must be > 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EndpointConfig;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&ClientConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ClientConfig::default();
        config.observability.log_level = "loud".to_string();
        config.balance.timeout_ms = 0;
        config.balance.display_decimals = 30;
        config.balance.endpoints.push(EndpointConfig {
            name: String::new(),
            url: "nope".to_string(),
            chain_id: None,
        });

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "observability.log_level",
                "balance.endpoints[2].name",
                "balance.endpoints[2].url",
                "balance.timeout_ms",
                "balance.display_decimals",
            ]
        );
    }

    #[test]
    fn test_rejects_zero_transfer_timings() {
        let mut config = ClientConfig::default();
        config.transfer.poll_interval_ms = 0;
        config.transfer.confirmation_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["transfer.poll_interval_ms", "transfer.confirmation_timeout_secs"]
        );
    }
}
