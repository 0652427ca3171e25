//! # Session Model
//!
//! Immutable catalogs the session is built from, and the state it exposes.

// region: --- Modules
pub mod chain;
pub mod state;
pub mod wallet;
// endregion: --- Modules

// region: --- Re-exports
pub use chain::{BlockExplorer, ChainCatalog, ChainDescriptor, NativeCurrency};
pub use state::{ConnectionState, ModalState, SessionSnapshot};
pub use wallet::{WalletDescriptor, WalletRegistry};
// endregion: --- Re-exports
