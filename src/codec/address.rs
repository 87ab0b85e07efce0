//! Account address format check for EVM chains.

use alloy::primitives::Address;

const BODY_LEN: usize = 40;

/// True iff `address` is 40 hex digits, optionally `0x`-prefixed, with a
/// valid EIP-55 checksum.
///
/// All-lowercase and all-uppercase bodies carry no checksum and are accepted.
pub fn is_valid(address: &str) -> bool {
    let body = address.strip_prefix("0x").unwrap_or(address);
    if body.len() != BODY_LEN || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    Address::parse_checksummed(format!("0x{}", body), None).is_ok()
}

/// Parse an address after `is_valid` has accepted it.
pub fn parse(address: &str) -> Option<Address> {
    if !is_valid(address) {
        return None;
    }
    let body = address.strip_prefix("0x").unwrap_or(address);
    format!("0x{}", body).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's first dev account.
    const CHECKSUMMED: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_accepts_checksummed() {
        assert!(is_valid(CHECKSUMMED));
    }

    #[test]
    fn test_accepts_single_case() {
        assert!(is_valid(&CHECKSUMMED.to_lowercase()));
        assert!(is_valid(&format!("0x{}", CHECKSUMMED[2..].to_uppercase())));
    }

    #[test]
    fn test_accepts_missing_prefix() {
        assert!(is_valid(&CHECKSUMMED[2..]));
        assert!(is_valid("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(!is_valid(&CHECKSUMMED[2..].replacen("f39F", "F39F", 1)));
        assert_eq!(parse(&CHECKSUMMED[2..]), parse(CHECKSUMMED));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let broken = CHECKSUMMED.replacen("0xf39F", "0xF39F", 1);
        assert!(!is_valid(&broken));
    }

    #[test]
    fn test_never_panics_on_junk() {
        let overlong = format!("0x{}", "a".repeat(400));
        let multibyte = format!("0x{}", "é".repeat(20));
        for input in ["", "0x", "0xZZ", "0X", "0Xf39fd6e51aad88f6f4ce6ab8827279cfffb92266", overlong.as_str(), multibyte.as_str()] {
            assert!(!is_valid(input), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse() {
        let parsed = parse(CHECKSUMMED).unwrap();
        assert_eq!(parsed.to_checksum(None), CHECKSUMMED);
        assert!(parse("0xZZ").is_none());
    }
}
