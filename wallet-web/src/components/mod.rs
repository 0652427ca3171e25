//! UI Components

pub mod currency_list;
pub mod navbar;
pub mod wallet_modal;

pub use currency_list::CurrencyList;
pub use navbar::{ConnectButton, Navbar};
pub use wallet_modal::WalletModal;
