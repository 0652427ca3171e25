//! Wallet state management
//!
//! Builds the one [`Session`] for the application root and mirrors its
//! snapshots into Leptos signals. Components reach it through
//! [`use_wallet_context`].

use leptos::prelude::*;
use lib_core::{
    ChainCatalog, ConnectionState, DataLoader, DataStatus, EventBus, Preferences, Session,
    Subscription, WalletEvent, WalletRegistry,
};
use shared::dto::currency::CurrencyMerged;
use std::rc::Rc;

use crate::services::{BrowserEnvironment, HttpMarketData, LocalStorageBackend, MetaMaskConnector};
use crate::utils::constants::{default_chains, WebConfig};

/// Render-ready copy of [`ConnectionState`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectionView {
    pub address: Option<String>,
    pub chain_id: Option<u64>,
    pub is_connecting: bool,
    pub is_connected: bool,
    pub error: Option<String>,
}

impl From<&ConnectionState> for ConnectionView {
    fn from(state: &ConnectionState) -> Self {
        Self {
            address: state.address.clone(),
            chain_id: state.chain_id,
            is_connecting: state.is_connecting,
            is_connected: state.is_connected,
            error: state.error.as_ref().map(|e| e.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataView {
    pub status: DataStatus,
    pub rows: Vec<CurrencyMerged>,
}

/// Picker entry.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletOption {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: Option<String>,
    pub installed: Option<bool>,
    pub download_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChainOption {
    pub id: u64,
    pub name: String,
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    session: StoredValue<Session, LocalStorage>,
    /// Dropped with the owning reactive scope, which unsubscribes everything.
    _subscriptions: StoredValue<Vec<Subscription>, LocalStorage>,
    wallets: StoredValue<Vec<WalletOption>>,
    chains: StoredValue<Vec<ChainOption>>,
    pub connection: RwSignal<ConnectionView>,
    pub modal_open: RwSignal<bool>,
    pub data: RwSignal<DataView>,
}

impl WalletContext {
    pub fn new(config: WebConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Invalid wallet configuration ({}), using defaults", e);
                WebConfig::default()
            }
        };

        let events = EventBus::<WalletEvent>::new();
        let metamask = Rc::new(MetaMaskConnector::new(events.clone()));
        let registry = WalletRegistry::new(vec![metamask.descriptor()]).unwrap_or_else(|e| {
            log::error!("Wallet registry rejected: {}", e);
            WalletRegistry::default()
        });
        let catalog = ChainCatalog::new(default_chains()).unwrap_or_else(|e| {
            log::error!("Chain catalog rejected: {}", e);
            ChainCatalog::default()
        });

        let session = Session::new(
            config.session.clone(),
            registry,
            catalog,
            Preferences::new(Rc::new(LocalStorageBackend)),
            Rc::new(BrowserEnvironment),
            &events,
        );
        let loader = DataLoader::new(Rc::new(HttpMarketData::new(
            config.currencies_url.clone(),
            config.balances_url.clone(),
            config.rates_url.clone(),
        )));

        let snapshot = session.snapshot();
        let connection = RwSignal::new(ConnectionView::from(&snapshot.connection));
        let modal_open = RwSignal::new(snapshot.modal.is_open);
        let data = RwSignal::new(DataView::default());

        let on_state = session.subscribe(move |snapshot| {
            connection.set(ConnectionView::from(&snapshot.connection));
            modal_open.set(snapshot.modal.is_open);
        });
        let on_data = loader.subscribe(move |aux| {
            data.set(DataView {
                status: aux.status,
                rows: aux.merged(),
            });
        });
        let tracking = loader.attach(&session, |load| leptos::task::spawn_local(load));

        let wallets = session
            .wallets()
            .iter()
            .map(|wallet| WalletOption {
                id: wallet.id.clone(),
                name: wallet.name.clone(),
                icon: wallet.icon.clone(),
                description: wallet.description.clone(),
                installed: wallet.installed,
                download_url: wallet.download_url.clone(),
            })
            .collect();
        let chains = session
            .chains()
            .iter()
            .map(|chain| ChainOption {
                id: chain.id,
                name: chain.name.clone(),
            })
            .collect();

        Self {
            session: StoredValue::new_local(session),
            _subscriptions: StoredValue::new_local(vec![on_state, on_data, tracking]),
            wallets: StoredValue::new(wallets),
            chains: StoredValue::new(chains),
            connection,
            modal_open,
            data,
        }
    }

    /// Auto-connect to the remembered wallet, if any.
    pub fn start(&self) {
        let session = self.session.get_value();
        leptos::task::spawn_local(async move { session.start().await });
    }

    pub fn connect(&self, wallet_id: String) {
        let session = self.session.get_value();
        leptos::task::spawn_local(async move { session.connect(&wallet_id).await });
    }

    pub fn disconnect(&self) {
        self.session.with_value(|session| session.disconnect());
    }

    pub fn switch_chain(&self, chain_id: u64) {
        let session = self.session.get_value();
        leptos::task::spawn_local(async move { session.switch_chain(chain_id).await });
    }

    pub fn open_modal(&self) {
        self.session.with_value(|session| session.open_modal());
    }

    pub fn close_modal(&self) {
        self.session.with_value(|session| session.close_modal());
    }

    pub fn wallets(&self) -> Vec<WalletOption> {
        self.wallets.get_value()
    }

    pub fn chains(&self) -> Vec<ChainOption> {
        self.chains.get_value()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.with(|state| state.is_connected)
    }

    pub fn address(&self) -> Option<String> {
        self.connection.with(|state| state.address.clone())
    }
}

pub fn provide_wallet_context(config: WebConfig) -> WalletContext {
    let context = WalletContext::new(config);
    provide_context(context);
    context.start();
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::SessionError;

    #[test]
    fn test_connection_view_renders_error_message() {
        let state = ConnectionState {
            chain_id: Some(137),
            error: Some(SessionError::UnsupportedChain(2)),
            ..ConnectionState::default()
        };

        let view = ConnectionView::from(&state);

        assert_eq!(view.chain_id, Some(137));
        assert!(!view.is_connected);
        assert_eq!(view.error.as_deref(), Some("Chain with id \"2\" not supported"));
    }
}
