//! # Wallet Connectors
//!
//! A [`Connector`] is the capability behind one wallet descriptor: "connect
//! to this wallet". It takes no input and yields a closed [`ConnectOutcome`].
//!
//! Connectors are also responsible for forwarding the wallet's later
//! `accountsChanged` / `chainChanged` / `disconnect` notifications into the
//! session's [`EventBus`](crate::bus::EventBus); the session does not poll.

use crate::error::ConnectorError;
use crate::provider::ProviderHandle;
use async_trait::async_trait;
use lib_utils::validate_not_empty;

#[async_trait(?Send)]
pub trait Connector {
    async fn connect(&self) -> Result<ConnectOutcome, ConnectorError>;
}

/// What a successful connection yields.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectOutcome {
    pub provider: ProviderHandle,
    pub address: String,
    pub chain_id: u64,
}

impl ConnectOutcome {
    pub fn new(provider: ProviderHandle, address: impl Into<String>, chain_id: u64) -> Self {
        Self {
            provider,
            address: address.into(),
            chain_id,
        }
    }

    /// Boundary check applied by the session before committing an outcome.
    pub fn validate(self) -> Result<Self, ConnectorError> {
        validate_not_empty(&self.address, "Connected account address").map_err(ConnectorError)?;
        Ok(self)
    }
}
