//! USDC amount conversions.

use alloy_primitives::{
    utils::{format_units, parse_units},
    U256,
};

/// USDC uses 6 decimals on both layers.
pub const USDC_DECIMALS: u8 = 6;

/// Parse a decimal USDC amount (`"1.5"`) into base units.
///
/// More than six fractional digits is an error rather than a silent truncation.
pub fn parse_usdc(amount: &str) -> eyre::Result<U256> {
    if let Some((_, fraction)) = amount.split_once('.') {
        if fraction.len() > USDC_DECIMALS as usize {
            eyre::bail!("USDC amount has more than {USDC_DECIMALS} decimal places: {amount}");
        }
    }

    let parsed = parse_units(amount, USDC_DECIMALS)?;
    if parsed.is_negative() {
        eyre::bail!("USDC amount must not be negative: {amount}");
    }
    Ok(parsed.get_absolute())
}

/// Format base units as a decimal USDC amount.
pub fn format_usdc(amount: U256) -> String {
    format_units(amount, USDC_DECIMALS).unwrap_or_else(|_| amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usdc() {
        assert_eq!(parse_usdc("1").unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_usdc("0.5").unwrap(), U256::from(500_000u64));
        assert_eq!(parse_usdc("0.000001").unwrap(), U256::from(1u64));
        assert!(parse_usdc("-1").is_err());
        assert!(parse_usdc("abc").is_err());
    }

    #[test]
    fn test_parse_usdc_rejects_sub_unit_precision() {
        assert!(parse_usdc("1.0000009").is_err());
        assert!(parse_usdc("0.0000001").is_err());
        assert_eq!(parse_usdc("1.123456").unwrap(), U256::from(1_123_456u64));
    }

    #[test]
    fn test_format_usdc() {
        assert_eq!(format_usdc(U256::from(1_500_000u64)), "1.500000");
    }
}
