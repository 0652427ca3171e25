//! Application constants and host configuration

use lib_core::{BlockExplorer, ChainDescriptor, NativeCurrency, SessionConfig};

pub const DATA_BASE: &str = "/data";

/// Host-level configuration: session knobs plus where auxiliary data lives.
#[derive(Clone, Debug)]
pub struct WebConfig {
    pub session: SessionConfig,
    pub currencies_url: String,
    pub balances_url: String,
    pub rates_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            currencies_url: format!("{}/currencies.json", DATA_BASE),
            balances_url: format!("{}/wallet-balance.json", DATA_BASE),
            rates_url: format!("{}/live-rates.json", DATA_BASE),
        }
    }
}

impl WebConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        self.session.validate()?;
        lib_utils::validate_not_empty(&self.currencies_url, "currencies_url")?;
        lib_utils::validate_not_empty(&self.balances_url, "balances_url")?;
        lib_utils::validate_not_empty(&self.rates_url, "rates_url")?;
        Ok(())
    }
}

fn ether(name: &str) -> NativeCurrency {
    NativeCurrency {
        name: name.to_string(),
        symbol: "ETH".to_string(),
        decimals: 18,
    }
}

/// Chains offered in the network switcher.
pub fn default_chains() -> Vec<ChainDescriptor> {
    vec![
        ChainDescriptor::ethereum_mainnet(),
        ChainDescriptor {
            id: 11155111,
            name: "Sepolia".to_string(),
            rpc_url: "https://rpc.sepolia.org".to_string(),
            native_currency: ether("Sepolia Ether"),
            block_explorer: Some(BlockExplorer {
                name: "Etherscan".to_string(),
                url: "https://sepolia.etherscan.io".to_string(),
            }),
        },
        ChainDescriptor {
            id: 137,
            name: "Polygon".to_string(),
            rpc_url: "https://polygon-rpc.com".to_string(),
            native_currency: NativeCurrency {
                name: "MATIC".to_string(),
                symbol: "MATIC".to_string(),
                decimals: 18,
            },
            block_explorer: Some(BlockExplorer {
                name: "PolygonScan".to_string(),
                url: "https://polygonscan.com".to_string(),
            }),
        },
        ChainDescriptor {
            id: 42161,
            name: "Arbitrum One".to_string(),
            rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
            native_currency: ether("Ether"),
            block_explorer: Some(BlockExplorer {
                name: "Arbiscan".to_string(),
                url: "https://arbiscan.io".to_string(),
            }),
        },
    ]
}
