//! # Core Library
//!
//! Wallet connection session: the state machine that tracks which wallet is
//! connected, on which chain, through which provider handle, and how
//! asynchronous wallet events fold back into that state.
//!
//! ## Modules
//!
//! - **[`config`]**: [`SessionConfig`] (auto-connect, remembered-wallet key and expiry)
//! - **[`error`]**: [`SessionError`] and the construction-time errors
//! - **[`model`]**: Wallet registry, chain catalog, connection and modal state
//! - **[`provider`]**: EIP-1193 provider contract, provider handles, the execution environment
//! - **[`connector`]**: The per-wallet "connect" capability
//! - **[`bus`]**: Typed publish/subscribe used for wallet events and state notifications
//! - **[`prefs`]**: Expiring key-value preferences
//! - **[`session`]**: [`Session`] itself
//! - **[`loader`]**: Auxiliary currency/balance/rate loading
//!
//! ## Threading
//!
//! Everything here is single-threaded (`Rc`, `RefCell`, `?Send` futures) to
//! match the browser event loop. Drive it with `wasm_bindgen_futures::spawn_local`
//! in the browser or a current-thread runtime natively.

pub mod bus;
pub mod config;
pub mod connector;
pub mod error;
pub mod loader;
pub mod model;
pub mod prefs;
pub mod provider;
pub mod session;

// Re-export commonly used types
pub use bus::{EventBus, Subscription, WalletEvent};
pub use config::SessionConfig;
pub use connector::{ConnectOutcome, Connector};
pub use error::{ConnectorError, ErrorKind, ProviderRpcError, RegistryError, SessionError, StoreError};
pub use loader::{AuxiliaryData, DataLoader, DataStatus, MarketData};
pub use model::{
    BlockExplorer, ChainCatalog, ChainDescriptor, ConnectionState, ModalState, NativeCurrency,
    SessionSnapshot, WalletDescriptor, WalletRegistry,
};
pub use prefs::{KeyValueBackend, MemoryBackend, Preferences};
pub use provider::{Eip1193Provider, Environment, ProviderHandle, ProviderId};
pub use session::Session;
