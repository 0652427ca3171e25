//! # Chain Catalog
//!
//! Chains the application is willing to switch to. A descriptor carries
//! everything `wallet_addEthereumChain` needs when the wallet does not know
//! the chain yet.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExplorer {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    pub id: u64,
    pub name: String,
    pub rpc_url: String,
    pub native_currency: NativeCurrency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer: Option<BlockExplorer>,
}

impl ChainDescriptor {
    /// Ethereum mainnet, the usual first catalog entry.
    pub fn ethereum_mainnet() -> Self {
        Self {
            id: 1,
            name: "Ethereum Mainnet".to_string(),
            rpc_url: "https://eth.llamarpc.com".to_string(),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
            block_explorer: Some(BlockExplorer {
                name: "Etherscan".to_string(),
                url: "https://etherscan.io".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainCatalog {
    chains: Vec<ChainDescriptor>,
}

impl ChainCatalog {
    pub fn new(chains: Vec<ChainDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for chain in &chains {
            if !seen.insert(chain.id) {
                return Err(RegistryError::DuplicateChain(chain.id));
            }
        }
        Ok(Self { chains })
    }

    pub fn get(&self, id: u64) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|chain| chain.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainDescriptor> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
