//! Chain ID → network metadata lookup.

use crate::network::types::{ChainId, NetworkInfo};

/// (chain id, name, symbol, explorer)
const NETWORKS: &[(u64, &str, &str, &str)] = &[
    (1, "Ethereum Mainnet", "ETH", "https://etherscan.io"),
    (5, "Goerli Testnet", "ETH", "https://goerli.etherscan.io"),
    (11155111, "Sepolia Testnet", "ETH", "https://sepolia.etherscan.io"),
    (137, "Polygon Mainnet", "MATIC", "https://polygonscan.com"),
    (80001, "Mumbai Testnet", "MATIC", "https://mumbai.polygonscan.com"),
    (56, "BSC Mainnet", "BNB", "https://bscscan.com"),
    (97, "BSC Testnet", "BNB", "https://testnet.bscscan.com"),
];

/// Look up display metadata by exact chain ID.
///
/// Unknown IDs produce `Network <id>` with an `ETH` symbol and no explorer.
pub fn lookup(chain_id: ChainId) -> NetworkInfo {
    match NETWORKS.iter().find(|(id, ..)| *id == chain_id.0) {
        Some((_, name, symbol, explorer)) => NetworkInfo {
            chain_id,
            name: (*name).to_string(),
            symbol: (*symbol).to_string(),
            explorer_base_url: (*explorer).to_string(),
        },
        None => NetworkInfo {
            chain_id,
            name: format!("Network {}", chain_id),
            symbol: "ETH".to_string(),
            explorer_base_url: "#".to_string(),
        },
    }
}

/// True if the chain is in the static table.
pub fn is_known(chain_id: ChainId) -> bool {
    NETWORKS.iter().any(|(id, ..)| *id == chain_id.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_networks() {
        let mainnet = lookup(ChainId(1));
        assert_eq!(mainnet.name, "Ethereum Mainnet");
        assert_eq!(mainnet.symbol, "ETH");

        let bsc = lookup(ChainId(56));
        assert_eq!(bsc.symbol, "BNB");
        assert_eq!(bsc.explorer_base_url, "https://bscscan.com");

        assert!(is_known(ChainId(11155111)));
    }

    #[test]
    fn test_unknown_network_fallback() {
        let info = lookup(ChainId(424242));
        assert_eq!(info.name, "Network 424242");
        assert_eq!(info.symbol, "ETH");
        assert_eq!(info.explorer_base_url, "#");
        assert!(!is_known(ChainId(424242)));
    }

    #[test]
    fn test_explorer_links() {
        let sepolia = lookup(ChainId(11155111));
        assert_eq!(
            sepolia.tx_url("0xabc").as_deref(),
            Some("https://sepolia.etherscan.io/tx/0xabc")
        );
        assert_eq!(
            sepolia.address_url("0xdef").as_deref(),
            Some("https://sepolia.etherscan.io/address/0xdef")
        );
        assert!(lookup(ChainId(7)).tx_url("0xabc").is_none());
    }
}
