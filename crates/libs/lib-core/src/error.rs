//! # Centralized Error Handling
//!
//! Error types for the wallet session, following the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Session errors** ([`SessionError`]) - never returned from session
//!    operations; they are captured into [`ConnectionState::error`] so
//!    presentation layers observe failures through state.
//!    - [`UnknownWallet`](SessionError::UnknownWallet) - bad id passed to `connect`
//!    - [`ConnectorFailure`](SessionError::ConnectorFailure) - the wallet's connector rejected
//!    - [`UnsupportedChain`](SessionError::UnsupportedChain) - `switch_chain` target not in the catalog
//!    - [`NoProviderAvailable`](SessionError::NoProviderAvailable) - no injected provider
//!    - [`ChainSwitchRejected`](SessionError::ChainSwitchRejected) - the wallet declined switch/add
//!    - [`DataLoadFailure`](SessionError::DataLoadFailure) - an auxiliary fetch failed
//!
//! 2. **Construction errors** ([`RegistryError`]) - duplicate ids when
//!    building the wallet registry or chain catalog.
//!
//! 3. **Collaborator errors** - [`ConnectorError`], [`ProviderRpcError`],
//!    [`StoreError`], produced by the pluggable pieces.
//!
//! [`ConnectionState::error`]: crate::model::ConnectionState::error

use thiserror::Error;

/// EIP-1193 code for "this chain has not been added to the wallet".
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED: i64 = 4001;

/// Failure recorded into the session's connection state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Wallet with id \"{0}\" not found")]
    UnknownWallet(String),

    /// Displays exactly the connector's own message.
    #[error("{0}")]
    ConnectorFailure(String),

    #[error("Chain with id \"{0}\" not supported")]
    UnsupportedChain(u64),

    #[error("No ethereum provider found")]
    NoProviderAvailable,

    #[error("Chain switch rejected ({code}): {message}")]
    ChainSwitchRejected { code: i64, message: String },

    #[error("Failed to load wallet data: {0}")]
    DataLoadFailure(String),
}

/// Fieldless discriminant of [`SessionError`], for matching in UI code and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownWallet,
    ConnectorFailure,
    UnsupportedChain,
    NoProviderAvailable,
    ChainSwitchRejected,
    DataLoadFailure,
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::UnknownWallet(_) => ErrorKind::UnknownWallet,
            SessionError::ConnectorFailure(_) => ErrorKind::ConnectorFailure,
            SessionError::UnsupportedChain(_) => ErrorKind::UnsupportedChain,
            SessionError::NoProviderAvailable => ErrorKind::NoProviderAvailable,
            SessionError::ChainSwitchRejected { .. } => ErrorKind::ChainSwitchRejected,
            SessionError::DataLoadFailure(_) => ErrorKind::DataLoadFailure,
        }
    }
}

impl From<ProviderRpcError> for SessionError {
    fn from(err: ProviderRpcError) -> Self {
        SessionError::ChainSwitchRejected {
            code: err.code,
            message: err.message,
        }
    }
}

impl From<ConnectorError> for SessionError {
    fn from(err: ConnectorError) -> Self {
        SessionError::ConnectorFailure(err.0)
    }
}

/// Rejection from a wallet connector ("not installed", user rejection, no accounts, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConnectorError(pub String);

impl ConnectorError {
    pub fn new(message: impl Into<String>) -> Self {
        ConnectorError(message.into())
    }
}

impl From<ProviderRpcError> for ConnectorError {
    fn from(err: ProviderRpcError) -> Self {
        ConnectorError(err.message)
    }
}

/// Error object returned by an EIP-1193 `request` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (code {code})")]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
}

impl ProviderRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == UNRECOGNIZED_CHAIN
    }
}

/// Duplicate or malformed entries when building the registry or catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate wallet id \"{0}\"")]
    DuplicateWallet(String),

    #[error("Duplicate chain id {0}")]
    DuplicateChain(u64),

    #[error("Wallet id cannot be empty")]
    EmptyWalletId,
}

/// Preference backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend refused the write (quota exceeded, storage disabled).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
