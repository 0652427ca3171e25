//! Browser implementations of the session's collaborators

pub mod ethereum;
pub mod market;
pub mod metamask;
pub mod storage;

pub use ethereum::BrowserEnvironment;
pub use market::HttpMarketData;
pub use metamask::MetaMaskConnector;
pub use storage::LocalStorageBackend;
