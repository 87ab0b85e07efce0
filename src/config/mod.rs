//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), path from WALLET_CLIENT_CONFIG
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to connector, fetcher and builder constructors
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, CONFIG_ENV_VAR};
pub use schema::{
    BalanceConfig, ClientConfig, EndpointConfig, ObservabilityConfig, TransferConfig, WalletConfig,
};
