//! # Connect / Disconnect / Auto-Connect Tests

use super::fakes::*;
use crate::config::SessionConfig;
use crate::error::{ErrorKind, SessionError};
use crate::model::{ConnectionState, SessionSnapshot};
use crate::prefs::{KeyValueBackend, MemoryBackend};
use chrono::Duration;
use std::cell::RefCell;
use std::rc::Rc;

#[tokio::test]
async fn test_connect_unknown_wallet() {
    let (h, _) = meta_harness();

    h.session.connect("phantom").await;

    let state = h.session.state();
    assert!(!state.is_connected);
    assert!(!state.is_connecting);
    assert_eq!(
        state.error,
        Some(SessionError::UnknownWallet("phantom".to_string()))
    );
    assert_eq!(h.remembered(), None);
}

#[tokio::test]
async fn test_connect_success() {
    // Arrange
    let (h, expected) = meta_harness();
    h.session.open_modal();

    // Act
    h.session.connect("meta").await;

    // Assert
    assert_eq!(
        h.session.state(),
        ConnectionState {
            address: Some("0xA".to_string()),
            chain_id: Some(1),
            is_connecting: false,
            is_connected: true,
            error: None,
            provider: Some(expected.provider),
        }
    );
    assert!(!h.session.modal().is_open);
    assert_eq!(h.remembered().as_deref(), Some("meta"));
}

#[tokio::test]
async fn test_connect_remembers_wallet_for_a_day() {
    let (h, _) = meta_harness();
    h.session.connect("meta").await;

    let raw: serde_json::Value =
        serde_json::from_str(&h.backend.get_item("lastConnectedWallet").unwrap()).unwrap();
    let expected_expiry = (start_time() + Duration::hours(24)).timestamp_millis();
    assert_eq!(raw["value"], "meta");
    assert_eq!(raw["expiry"], expected_expiry);
}

#[tokio::test]
async fn test_connect_failure_reports_connector_message() {
    let h = harness(vec![wallet("meta", FakeConnector::rejecting("fail"))]);

    h.session.connect("meta").await;

    let state = h.session.state();
    assert!(!state.is_connected);
    assert!(!state.is_connecting);
    let error = state.error.unwrap();
    assert_eq!(error.kind(), ErrorKind::ConnectorFailure);
    assert_eq!(error.to_string(), "fail");
    assert_eq!(h.remembered(), None);
}

#[tokio::test]
async fn test_connect_rejects_empty_address() {
    let h = harness(vec![wallet("meta", FakeConnector::resolving(outcome("", 1)))]);

    h.session.connect("meta").await;

    let state = h.session.state();
    assert!(!state.is_connected);
    assert_eq!(state.address, None);
    assert_eq!(state.error.map(|e| e.kind()), Some(ErrorKind::ConnectorFailure));
}

#[tokio::test]
async fn test_connect_clears_previous_error() {
    let (h, _) = meta_harness();
    h.session.connect("phantom").await;
    assert!(h.session.state().error.is_some());

    h.session.connect("meta").await;

    assert_eq!(h.session.state().error, None);
    assert!(h.session.state().is_connected);
}

#[tokio::test]
async fn test_disconnect_is_idempotent_and_keeps_preference() {
    let (h, _) = meta_harness();
    h.session.connect("meta").await;

    h.session.disconnect();
    let first = h.session.state();
    h.session.disconnect();
    let second = h.session.state();

    assert_eq!(first, ConnectionState::default());
    assert_eq!(second, ConnectionState::default());
    assert_eq!(h.remembered().as_deref(), Some("meta"));
}

#[tokio::test]
async fn test_connect_while_connecting_is_noop() {
    let (connector, release) = FakeConnector::gated(outcome("0xA", 1));
    let h = harness(vec![wallet("meta", connector.clone())]);

    let pending = h.session.connect("meta");
    futures::pin_mut!(pending);
    assert!(futures::poll!(pending.as_mut()).is_pending());
    assert!(h.session.state().is_connecting);

    h.session.connect("meta").await;
    assert_eq!(connector.calls(), 1);
    assert!(h.session.state().is_connecting);

    release.send(()).unwrap();
    pending.await;

    assert!(h.session.state().is_connected);
    assert_eq!(connector.calls(), 1);
}

#[tokio::test]
async fn test_slow_connector_after_disconnect_is_discarded() {
    let (connector, release) = FakeConnector::gated(outcome("0xA", 1));
    let h = harness(vec![wallet("meta", connector)]);

    let pending = h.session.connect("meta");
    futures::pin_mut!(pending);
    assert!(futures::poll!(pending.as_mut()).is_pending());

    h.session.disconnect();
    release.send(()).unwrap();
    pending.await;

    assert_eq!(h.session.state(), ConnectionState::default());
    assert_eq!(h.remembered(), None);
}

#[tokio::test]
async fn test_reconnect_drops_previous_account_while_connecting() {
    let (connector, release) = FakeConnector::gated(outcome("0xB", 137));
    let first = FakeConnector::resolving(outcome("0xA", 1));
    let h = harness(vec![wallet("meta", first), wallet("coinbase", connector)]);
    h.session.connect("meta").await;

    let pending = h.session.connect("coinbase");
    futures::pin_mut!(pending);
    assert!(futures::poll!(pending.as_mut()).is_pending());

    let connecting = h.session.state();
    assert!(connecting.is_connecting && !connecting.is_connected);
    assert_eq!(connecting.address, None);
    assert_eq!(connecting.provider, None);

    release.send(()).unwrap();
    pending.await;

    let state = h.session.state();
    assert_eq!(state.address.as_deref(), Some("0xB"));
    assert_eq!(state.chain_id, Some(137));
    assert_eq!(h.remembered().as_deref(), Some("coinbase"));
}

#[tokio::test]
async fn test_listeners_see_each_transition() {
    let (h, _) = meta_harness();
    let seen: Rc<RefCell<Vec<SessionSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let _sub = h.session.subscribe(move |snapshot| log.borrow_mut().push(snapshot.clone()));

    h.session.connect("meta").await;
    h.session.disconnect();
    h.session.disconnect();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].connection.is_connecting);
    assert!(seen[1].connection.is_connected);
    assert!(seen[2].connection.is_idle());
}

// region: --- Auto-connect

#[tokio::test]
async fn test_start_reconnects_remembered_wallet() {
    let connector = FakeConnector::resolving(outcome("0xA", 1));
    let h = harness(vec![wallet("meta", connector.clone())]);
    h.prefs.set("lastConnectedWallet", &"meta", Some(24)).unwrap();

    h.session.start().await;
    h.session.start().await;

    assert!(h.session.state().is_connected);
    assert_eq!(connector.calls(), 1);
}

#[tokio::test]
async fn test_start_ignores_expired_preference() {
    let connector = FakeConnector::resolving(outcome("0xA", 1));
    let h = harness(vec![wallet("meta", connector.clone())]);
    h.prefs.set("lastConnectedWallet", &"meta", Some(24)).unwrap();
    h.now.set(start_time() + Duration::hours(25));

    h.session.start().await;

    assert!(h.session.state().is_idle());
    assert_eq!(connector.calls(), 0);
    assert!(h.backend.is_empty());
}

#[tokio::test]
async fn test_start_ignores_unregistered_wallet() {
    let (h, _) = meta_harness();
    h.prefs.set("lastConnectedWallet", &"phantom", Some(24)).unwrap();

    h.session.start().await;

    assert!(h.session.state().is_idle());
}

#[tokio::test]
async fn test_start_respects_auto_connect_flag() {
    let connector = FakeConnector::resolving(outcome("0xA", 1));
    let config = SessionConfig {
        auto_connect: false,
        ..SessionConfig::default()
    };
    let h = harness_with(config, vec![wallet("meta", connector.clone())], MemoryBackend::new());
    h.prefs.set("lastConnectedWallet", &"meta", None).unwrap();

    h.session.start().await;

    assert_eq!(connector.calls(), 0);
    assert!(!h.session.state().is_connected);
}

#[tokio::test]
async fn test_start_failure_lands_in_state() {
    let h = harness(vec![wallet("meta", FakeConnector::rejecting("User rejected the request."))]);
    h.prefs.set("lastConnectedWallet", &"meta", Some(24)).unwrap();

    h.session.start().await;

    let state = h.session.state();
    assert!(!state.is_connected);
    assert_eq!(
        state.error,
        Some(SessionError::ConnectorFailure("User rejected the request.".to_string()))
    );
}

// endregion: --- Auto-connect
