//! # Wallet Registry
//!
//! The fixed set of wallets offered in the picker. Each descriptor carries
//! the [`Connector`] that knows how to reach that wallet.

use crate::connector::Connector;
use crate::error::RegistryError;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// A wallet the user can pick.
#[derive(Clone)]
pub struct WalletDescriptor {
    pub id: String,
    pub name: String,
    /// Icon URL or data URI.
    pub icon: String,
    pub connector: Rc<dyn Connector>,
    pub description: Option<String>,
    /// `None` when installation cannot be detected.
    pub installed: Option<bool>,
    pub download_url: Option<String>,
}

impl WalletDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        connector: Rc<dyn Connector>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            connector,
            description: None,
            installed: None,
            download_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_installed(mut self, installed: bool) -> Self {
        self.installed = Some(installed);
        self
    }

    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }
}

impl fmt::Debug for WalletDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("installed", &self.installed)
            .finish_non_exhaustive()
    }
}

/// Registered wallets, in registration order.
#[derive(Clone, Debug, Default)]
pub struct WalletRegistry {
    wallets: Vec<WalletDescriptor>,
}

impl WalletRegistry {
    /// Build the registry. Ids must be non-empty and unique.
    pub fn new(wallets: Vec<WalletDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for wallet in &wallets {
            if wallet.id.trim().is_empty() {
                return Err(RegistryError::EmptyWalletId);
            }
            if !seen.insert(wallet.id.as_str()) {
                return Err(RegistryError::DuplicateWallet(wallet.id.clone()));
            }
        }
        Ok(Self { wallets })
    }

    pub fn resolve(&self, id: &str) -> Option<&WalletDescriptor> {
        self.wallets.iter().find(|wallet| wallet.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WalletDescriptor> {
        self.wallets.iter()
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}
