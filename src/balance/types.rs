//! Balance value types.

use alloy::primitives::{Address, U256};
use serde::Serialize;
use std::fmt;

use crate::codec::units::{format_units, NATIVE_DECIMALS};
use crate::network::ChainId;

/// Balance of the native asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// Exact value in minimal units.
    pub minimal_units: U256,
    /// Major-unit decimal string at display precision.
    pub amount: String,
}

impl Balance {
    pub fn from_minimal_units(minimal_units: U256, precision: u8) -> Self {
        Self {
            minimal_units,
            amount: format_units(minimal_units, NATIVE_DECIMALS, precision),
        }
    }

    pub fn amount_major_units(&self) -> &str {
        &self.amount
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.amount)
    }
}

/// Identity a balance fetch was issued for.
///
/// A result is applied only while the manager's generation still equals
/// `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceTicket {
    pub account: Address,
    pub chain_id: ChainId,
    pub generation: u64,
}
