//! Pure encoding helpers shared by the balance and transfer paths.
//!
//! # Data Flow
//! ```text
//! payload text ──▶ hex.rs (UTF-8 ↔ 0x hex) ──▶ transaction data
//! recipient    ──▶ address.rs (format + EIP-55 check)
//! amount       ──▶ units.rs (decimal ↔ minimal units, U256 only)
//! ```
//!
//! # Design Decisions
//! - Nothing here panics; failures come back as `Result` or `bool`
//! - No floating point anywhere in unit conversion

pub mod address;
pub mod hex;
pub mod units;

pub use address::is_valid as is_valid_address;
pub use hex::{decode as decode_hex, encode as encode_hex};
pub use units::{format_units, parse_units, NATIVE_DECIMALS};
