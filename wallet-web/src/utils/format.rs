//! # Formatting Utilities for Wallet Web
//!
//! Number and label formatting specific to the wallet pages.
//! For address formatting, use [`shared::utils::truncate_address`].

use lib_utils::network_name;

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use wallet_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (formatted.as_str(), ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Wallet balance for a list row: up to 4 decimals, trailing zeros dropped.
pub fn format_balance(amount: f64) -> String {
    let trimmed = shared::utils::format_amount(amount, 4);
    match trimmed.split_once('.') {
        Some((integer, decimal)) => match integer.parse::<f64>() {
            Ok(whole) => format!("{}.{}", format_number(whole, 0), decimal),
            Err(_) => trimmed,
        },
        None => trimmed
            .parse::<f64>()
            .map(|whole| format_number(whole, 0))
            .unwrap_or(trimmed),
    }
}

/// Network label for the status view.
pub fn format_network(chain_id: Option<u64>) -> String {
    match chain_id {
        Some(id) => network_name(id),
        None => "Unknown network".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(1245.0), "1,245");
        assert_eq!(format_balance(20.3), "20.3");
        assert_eq!(format_balance(0.12345), "0.1235");
    }

    #[test]
    fn test_format_network() {
        assert_eq!(format_network(Some(1)), "Ethereum");
        assert_eq!(format_network(Some(999)), "Chain 999");
        assert_eq!(format_network(None), "Unknown network");
    }
}
