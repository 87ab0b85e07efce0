//! Exact conversion between major-unit decimals and minimal-unit integers.
//!
//! All arithmetic is on `U256`; display strings are produced only here.

use alloy::primitives::U256;

use crate::error::{WalletError, WalletResult};

/// Decimal places of the native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Parse a non-negative decimal string into minimal units.
///
/// Accepts `"1"`, `"1.5"`, `".5"` and surrounding whitespace. Rejects signs,
/// exponents, more than `decimals` fractional digits and values above `U256::MAX`.
pub fn parse_units(amount: &str, decimals: u8) -> WalletResult<U256> {
    let trimmed = amount.trim();
    let invalid = |why: &str| WalletError::InvalidAmount(format!("{:?}: {}", amount, why));

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("no digits"));
    }
    if trimmed.ends_with('.') {
        return Err(invalid("missing fractional digits"));
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("not a plain decimal number"));
    }
    if frac.len() > decimals as usize {
        return Err(invalid("too many decimal places"));
    }

    let overflow = || invalid("value too large");
    let scale = U256::from(10u8).pow(U256::from(decimals));
    let whole_units = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10).map_err(|_| overflow())?
    };
    let frac_units = if frac.is_empty() {
        U256::ZERO
    } else {
        let padded = format!("{:0<width$}", frac, width = decimals as usize);
        U256::from_str_radix(&padded, 10).map_err(|_| overflow())?
    };

    whole_units
        .checked_mul(scale)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or_else(overflow)
}

/// Render minimal units as a major-unit decimal with exactly `precision` places.
///
/// Digits beyond `precision` are truncated, so a displayed balance never
/// exceeds the real one.
pub fn format_units(value: U256, decimals: u8, precision: u8) -> String {
    let precision = precision.min(decimals);
    let scale = U256::from(10u8).pow(U256::from(decimals));
    let whole = value / scale;
    if precision == 0 {
        return whole.to_string();
    }

    let remainder = value % scale;
    let truncate = U256::from(10u8).pow(U256::from(decimals - precision));
    let frac = remainder / truncate;
    format!("{}.{:0>width$}", whole, frac.to_string(), width = precision as usize)
}
