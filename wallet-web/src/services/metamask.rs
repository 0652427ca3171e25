//! MetaMask connector
//!
//! Requests accounts from the injected provider and forwards its
//! `accountsChanged` / `chainChanged` / `disconnect` notifications into the
//! session's wallet event bus.

use crate::services::ethereum::{
    ethereum, is_metamask, is_metamask_installed, off_ethereum_event, on_ethereum_event,
    InjectedProvider,
};
use async_trait::async_trait;
use lib_core::{
    ConnectOutcome, Connector, ConnectorError, Eip1193Provider, EventBus, ProviderHandle,
    WalletDescriptor, WalletEvent,
};
use lib_utils::parse_chain_id;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const METAMASK_ID: &str = "metamask";
pub const METAMASK_DOWNLOAD_URL: &str = "https://metamask.io/download/";
const METAMASK_ICON: &str = "/icons/metamask.svg";

/// JS listeners registered on the provider; removed again on drop.
struct ProviderListeners {
    provider: JsValue,
    handlers: Vec<(&'static str, Closure<dyn FnMut(JsValue)>)>,
}

impl ProviderListeners {
    fn install(provider: &JsValue, events: &EventBus<WalletEvent>) -> Self {
        let accounts_bus = events.clone();
        let accounts = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let accounts: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap_or_default();
            log::debug!("accountsChanged: {} account(s)", accounts.len());
            accounts_bus.publish(&WalletEvent::AccountsChanged(accounts));
        });

        let chain_bus = events.clone();
        let chain = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let raw = value.as_string().unwrap_or_default();
            match parse_chain_id(&raw) {
                Ok(chain_id) => {
                    chain_bus.publish(&WalletEvent::ChainChanged(chain_id));
                }
                Err(e) => log::warn!("Ignoring chainChanged payload: {}", e),
            }
        });

        let disconnect_bus = events.clone();
        let disconnect = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
            disconnect_bus.publish(&WalletEvent::Disconnected);
        });

        let handlers = vec![
            ("accountsChanged", accounts),
            ("chainChanged", chain),
            ("disconnect", disconnect),
        ];
        for (event, handler) in &handlers {
            on_ethereum_event(provider, event, handler.as_ref().unchecked_ref());
        }

        Self {
            provider: provider.clone(),
            handlers,
        }
    }
}

impl Drop for ProviderListeners {
    fn drop(&mut self) {
        for (event, handler) in &self.handlers {
            off_ethereum_event(&self.provider, event, handler.as_ref().unchecked_ref());
        }
    }
}

pub struct MetaMaskConnector {
    events: EventBus<WalletEvent>,
    listeners: RefCell<Option<ProviderListeners>>,
}

impl MetaMaskConnector {
    pub fn new(events: EventBus<WalletEvent>) -> Self {
        Self {
            events,
            listeners: RefCell::new(None),
        }
    }

    /// Registry entry for this connector.
    pub fn descriptor(self: Rc<Self>) -> WalletDescriptor {
        WalletDescriptor::new(METAMASK_ID, "MetaMask", METAMASK_ICON, self)
            .with_description("Connect to your MetaMask Wallet")
            .with_installed(is_metamask_installed())
            .with_download_url(METAMASK_DOWNLOAD_URL)
    }
}

#[async_trait(?Send)]
impl Connector for MetaMaskConnector {
    async fn connect(&self) -> Result<ConnectOutcome, ConnectorError> {
        let raw = ethereum()
            .filter(is_metamask)
            .ok_or_else(|| ConnectorError::new("MetaMask is not installed"))?;
        let provider = InjectedProvider::new(raw.clone());

        let accounts = provider.request("eth_requestAccounts", None).await?;
        let accounts: Vec<String> = serde_json::from_value(accounts)
            .map_err(|e| ConnectorError::new(format!("Unexpected accounts payload: {}", e)))?;
        let address = accounts
            .into_iter()
            .next()
            .ok_or_else(|| ConnectorError::new("No accounts found"))?;

        let chain = provider.request("eth_chainId", None).await?;
        let chain_id = chain
            .as_str()
            .ok_or_else(|| ConnectorError::new("Unexpected eth_chainId payload"))
            .and_then(|hex| parse_chain_id(hex).map_err(|e| ConnectorError::new(e.to_string())))?;

        // Dropping the previous set unregisters its handlers.
        *self.listeners.borrow_mut() = Some(ProviderListeners::install(&raw, &self.events));

        log::info!("MetaMask connected: {} on chain {}", address, chain_id);
        Ok(ConnectOutcome::new(
            ProviderHandle::new(Rc::new(provider)),
            address,
            chain_id,
        ))
    }
}
