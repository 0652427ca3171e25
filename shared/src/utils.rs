//! # Shared Utility Functions
//!
//! Display helpers used by the wallet front end.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x1234...5678` style for EVM addresses
//!
//! ## Amount Formatting
//!
//! - [`format_amount`] - Fixed decimals with trailing zeros removed
//! - [`format_fiat`] - Convert a balance through a decimal-string rate
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x1234567890123456789012345678901234567890";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x1234...7890");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1234567890123456789012345678901234567890";
/// assert_eq!(format_address(addr, 6, 4), "0x1234...7890");
/// assert_eq!(format_address("0xA", 6, 4), "0xA");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || !address.is_char_boundary(prefix_len)
        || !address.is_char_boundary(address_len - suffix_len)
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an EVM address as `0x` plus four characters, ellipsis, last four.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x1234567890123456789012345678901234567890";
/// assert_eq!(truncate_address(addr), "0x1234...7890");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Format a number with `decimals` places and strip trailing zeros.
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(1.5, 4), "1.5");
/// assert_eq!(format_amount(100.0, 2), "100");
/// ```
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Convert `value` through a decimal-string `rate` and label it with `to_currency`.
///
/// A zero balance short-circuits to `0 <to_currency>`. Returns `None` when the
/// rate is not a number.
pub fn format_fiat(value: f64, to_currency: &str, rate: &str) -> Option<String> {
    if value == 0.0 {
        return Some(format!("0 {}", to_currency));
    }
    let rate: f64 = rate.trim().parse().ok()?;
    Some(format!("{} {}", format_amount(value * rate, 2), to_currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x1234567890123456789012345678901234567890";
        assert_eq!(format_address(addr, 6, 4), "0x1234...7890");
        assert_eq!(format_address(addr, 4, 4), "0x12...7890");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xA", 6, 4), "0xA");
        assert_eq!(format_address("short", 4, 4), "short");
    }

    #[test]
    fn test_format_amount_strips_zeros() {
        assert_eq!(format_amount(0.0, 2), "0");
        assert_eq!(format_amount(1.50, 2), "1.5");
        assert_eq!(format_amount(1245.0, 4), "1245");
        assert_eq!(format_amount(20.3456, 2), "20.35");
    }

    #[test]
    fn test_format_fiat() {
        assert_eq!(format_fiat(2.0, "USD", "1.25").as_deref(), Some("2.5 USD"));
        assert_eq!(format_fiat(0.0, "USD", "garbage").as_deref(), Some("0 USD"));
        assert_eq!(format_fiat(1.0, "USD", "garbage"), None);
    }
}
