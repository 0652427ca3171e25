//! # Chain Switch Tests

use super::fakes::*;
use crate::error::{ErrorKind, ProviderRpcError, SessionError, UNRECOGNIZED_CHAIN, USER_REJECTED};
use crate::config::SessionConfig;
use crate::model::{ChainCatalog, ChainDescriptor, WalletRegistry};
use crate::provider::Eip1193Provider;
use crate::session::Session;
use serde_json::{json, Value};
use std::rc::Rc;

#[tokio::test]
async fn test_switch_to_unknown_chain() {
    let (h, _) = meta_harness();
    h.session.connect("meta").await;

    h.session.switch_chain(2).await;

    let state = h.session.state();
    assert_eq!(state.error.as_ref().map(|e| e.kind()), Some(ErrorKind::UnsupportedChain));
    assert_eq!(state.error, Some(SessionError::UnsupportedChain(2)));
    assert_eq!(state.chain_id, Some(1));
    assert!(h.provider.requests().is_empty());
}

#[tokio::test]
async fn test_switch_without_injected_provider() {
    let (h, _) = meta_harness();
    h.environment.set(None);

    h.session.switch_chain(137).await;

    assert_eq!(h.session.state().error, Some(SessionError::NoProviderAvailable));
    assert_eq!(h.session.state().chain_id, None);
}

#[tokio::test]
async fn test_switch_known_chain() {
    let (h, expected) = meta_harness();
    h.session.connect("meta").await;

    h.session.switch_chain(137).await;

    assert_eq!(
        h.provider.requests(),
        vec![(
            "wallet_switchEthereumChain".to_string(),
            Some(json!([{ "chainId": "0x89" }]))
        )]
    );
    let state = h.session.state();
    assert_eq!(state.chain_id, Some(137));
    assert_eq!(state.error, None);
    assert_eq!(state.address.as_deref(), Some("0xA"));
    assert_eq!(state.provider, Some(expected.provider));
}

#[tokio::test]
async fn test_switch_adds_unrecognized_chain_then_retries() {
    // Arrange
    let (h, _) = meta_harness();
    h.session.connect("meta").await;
    h.provider.respond(Err(ProviderRpcError::new(
        UNRECOGNIZED_CHAIN,
        "Unrecognized chain ID \"0x89\".",
    )));

    // Act
    h.session.switch_chain(137).await;

    // Assert
    assert_eq!(
        h.provider.methods(),
        vec![
            "wallet_switchEthereumChain",
            "wallet_addEthereumChain",
            "wallet_switchEthereumChain",
        ]
    );
    let (_, add_params) = h.provider.requests()[1].clone();
    assert_eq!(
        add_params,
        Some(json!([{
            "chainId": "0x89",
            "chainName": "Polygon Mainnet",
            "rpcUrls": ["https://polygon-rpc.com"],
            "nativeCurrency": { "name": "MATIC", "symbol": "MATIC", "decimals": 18 },
            "blockExplorerUrls": ["https://polygonscan.com"],
        }]))
    );
    assert_eq!(h.session.state().chain_id, Some(137));
    assert_eq!(h.session.state().error, None);
}

#[tokio::test]
async fn test_add_chain_omits_missing_explorer() {
    let (h, _) = meta_harness();
    h.provider.respond(Err(ProviderRpcError::new(UNRECOGNIZED_CHAIN, "Unrecognized chain")));

    let bare = ChainDescriptor {
        block_explorer: None,
        ..polygon()
    };
    let chains = ChainCatalog::new(vec![bare]).unwrap();
    let session = Session::new(
        SessionConfig::default(),
        WalletRegistry::default(),
        chains,
        h.prefs.clone(),
        h.environment.clone(),
        &h.events,
    );

    session.switch_chain(137).await;

    let (_, add_params) = h.provider.requests()[1].clone();
    let add_params: Value = add_params.unwrap();
    assert!(add_params[0].get("blockExplorerUrls").is_none());
    assert_eq!(session.state().chain_id, Some(137));
}

#[tokio::test]
async fn test_switch_rejected_by_user() {
    let (h, _) = meta_harness();
    h.session.connect("meta").await;
    h.provider.respond(Err(ProviderRpcError::new(
        USER_REJECTED,
        "User rejected the request.",
    )));

    h.session.switch_chain(137).await;

    let state = h.session.state();
    assert_eq!(
        state.error,
        Some(SessionError::ChainSwitchRejected {
            code: USER_REJECTED,
            message: "User rejected the request.".to_string(),
        })
    );
    assert_eq!(state.chain_id, Some(1));
    assert!(state.is_connected);
    assert_eq!(h.provider.methods().len(), 1);
}

#[tokio::test]
async fn test_failed_add_is_not_retried() {
    let (h, _) = meta_harness();
    h.session.connect("meta").await;
    h.provider.respond(Err(ProviderRpcError::new(UNRECOGNIZED_CHAIN, "Unrecognized chain")));
    h.provider.respond(Err(ProviderRpcError::new(-32602, "Invalid rpcUrls")));

    h.session.switch_chain(137).await;

    assert_eq!(
        h.provider.methods(),
        vec!["wallet_switchEthereumChain", "wallet_addEthereumChain"]
    );
    assert_eq!(
        h.session.state().error.map(|e| e.to_string()),
        Some("Chain switch rejected (-32602): Invalid rpcUrls".to_string())
    );
    assert_eq!(h.session.state().chain_id, Some(1));
}

#[tokio::test]
async fn test_switch_uses_current_injected_provider() {
    let (h, _) = meta_harness();
    let replacement = RecordingProvider::new();
    h.environment.set(Some(replacement.clone() as Rc<dyn Eip1193Provider>));

    h.session.switch_chain(1).await;

    assert!(h.provider.requests().is_empty());
    assert_eq!(replacement.methods(), vec!["wallet_switchEthereumChain"]);
    assert_eq!(h.session.state().chain_id, Some(1));
}
