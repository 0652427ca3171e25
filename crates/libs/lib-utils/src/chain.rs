//! # Chain Identifier Helpers
//!
//! EIP-1193 providers exchange chain ids as `0x`-prefixed hex strings
//! (`"0x1"`, `"0xaa36a7"`), while the rest of the workspace uses plain
//! integers. These helpers convert between the two.

/// Encode a chain id the way `wallet_switchEthereumChain` expects it.
///
/// ```rust
/// use lib_utils::chain::chain_id_to_hex;
///
/// assert_eq!(chain_id_to_hex(1), "0x1");
/// assert_eq!(chain_id_to_hex(11155111), "0xaa36a7");
/// ```
pub fn chain_id_to_hex(chain_id: u64) -> String {
    format!("0x{:x}", chain_id)
}

/// Decode a chain id from a provider payload.
///
/// Accepts `0x`/`0X`-prefixed hex (what `chainChanged` and `eth_chainId`
/// deliver) and bare decimal (what some injected providers report through
/// `net_version`).
pub fn parse_chain_id(raw: &str) -> Result<u64, Error> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| Error::InvalidChainId(raw.to_string()))
}

/// Human-readable name for well-known networks, `Chain <id>` otherwise.
pub fn network_name(chain_id: u64) -> String {
    let name = match chain_id {
        1 => "Ethereum",
        5 => "Goerli",
        10 => "Optimism",
        56 => "BSC",
        137 => "Polygon",
        42161 => "Arbitrum",
        43114 => "Avalanche",
        80001 => "Mumbai",
        11155111 => "Sepolia",
        _ => return format!("Chain {}", chain_id),
    };
    name.to_string()
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidChainId(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain_id_hex_and_decimal() {
        assert_eq!(parse_chain_id("0x1"), Ok(1));
        assert_eq!(parse_chain_id("0X89"), Ok(137));
        assert_eq!(parse_chain_id("0xaa36a7"), Ok(11155111));
        assert_eq!(parse_chain_id("56"), Ok(56));
    }

    #[test]
    fn test_parse_chain_id_rejects_garbage() {
        assert_eq!(
            parse_chain_id("0xzz"),
            Err(Error::InvalidChainId("0xzz".to_string()))
        );
        assert!(parse_chain_id("").is_err());
    }

    #[test]
    fn test_network_name() {
        assert_eq!(network_name(1), "Ethereum");
        assert_eq!(network_name(11155111), "Sepolia");
        assert_eq!(network_name(999), "Chain 999");
    }
}
