//! UTF-8 text ↔ `0x`-prefixed hex transcoding.
//!
//! Decoding is a best-effort preview: invalid UTF-8 is substituted, not
//! rejected. It must never feed financial logic.

use alloy::hex as alloy_hex;

use crate::error::{WalletError, WalletResult};

/// Encode text as lowercase hex with a `0x` prefix. Empty text gives `"0x"`.
pub fn encode(text: &str) -> String {
    format!("0x{}", alloy_hex::encode(text.as_bytes()))
}

/// Decode hex (optional `0x` prefix) into text.
pub fn decode(hex: &str) -> WalletResult<String> {
    let bytes = decode_bytes(hex)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decode hex (optional `0x` prefix) into raw bytes.
pub fn decode_bytes(hex: &str) -> WalletResult<Vec<u8>> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if !is_hex_digits(digits) {
        return Err(WalletError::MalformedHex(hex.to_string()));
    }
    alloy_hex::decode(digits).map_err(|e| WalletError::MalformedHex(format!("{}: {}", hex, e)))
}

/// True iff `hex` is `0x` followed by an even number of hex digits.
pub fn is_well_formed(hex: &str) -> bool {
    hex.strip_prefix("0x").is_some_and(is_hex_digits)
}

fn is_hex_digits(digits: &str) -> bool {
    digits.len() % 2 == 0 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_round_trip_any_text(text in any::<String>()) {
            let encoded = encode(&text);
            prop_assert!(is_well_formed(&encoded));
            prop_assert_eq!(decode(&encoded).unwrap(), text);
        }

        #[test]
        fn test_decode_never_panics(input in ".*") {
            let _ = decode(&input);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(""), "0x");
        assert_eq!(decode("0x").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_encode_is_lowercase() {
        assert_eq!(encode("hello"), "0x68656c6c6f");
        assert_eq!(encode("\u{ff}"), "0xc3bf");
    }

    #[test]
    fn test_round_trip_multibyte() {
        for text in ["hello", "héllo wörld", "链上留言", "🚀 to the moon", "line\nbreak\0nul"] {
            assert_eq!(decode(&encode(text)).unwrap(), text);
        }
    }

    #[test]
    fn test_decode_accepts_missing_prefix_and_uppercase() {
        assert_eq!(decode("68656C6C6F").unwrap(), "hello");
        assert_eq!(decode("0x68656C6c6f").unwrap(), "hello");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode("0x123"), Err(WalletError::MalformedHex(_))));
        assert!(matches!(decode("0xzz"), Err(WalletError::MalformedHex(_))));
        assert!(matches!(decode("0x0x00"), Err(WalletError::MalformedHex(_))));
        assert!(matches!(decode("0xé0"), Err(WalletError::MalformedHex(_))));
    }

    #[test]
    fn test_decode_substitutes_invalid_utf8() {
        assert_eq!(decode("0xff").unwrap(), "\u{fffd}");
        assert_eq!(decode("0x68ff69").unwrap(), "h\u{fffd}i");
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("0x"));
        assert!(is_well_formed("0xdead"));
        assert!(is_well_formed("0xDEADbeef"));
        assert!(!is_well_formed("dead"));
        assert!(!is_well_formed("0xdea"));
        assert!(!is_well_formed("0xdeag"));
    }
}
