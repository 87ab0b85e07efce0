//! Chain identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display metadata for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub chain_id: ChainId,
    pub name: String,
    /// Native asset ticker.
    pub symbol: String,
    /// Block explorer root, or `#` when none is known.
    pub explorer_base_url: String,
}

impl NetworkInfo {
    /// Explorer page for a transaction, if the chain has an explorer.
    pub fn tx_url(&self, tx_hash: &str) -> Option<String> {
        self.explorer_link("tx", tx_hash)
    }

    /// Explorer page for an account, if the chain has an explorer.
    pub fn address_url(&self, address: &str) -> Option<String> {
        self.explorer_link("address", address)
    }

    fn explorer_link(&self, kind: &str, id: &str) -> Option<String> {
        if self.explorer_base_url == "#" {
            return None;
        }
        Some(format!("{}/{}/{}", self.explorer_base_url.trim_end_matches('/'), kind, id))
    }
}
