//! EIP-1193 bindings for `window.ethereum`
//!
//! Thin JavaScript interop plus the `lib-core` provider/environment
//! implementations built on it.

use async_trait::async_trait;
use js_sys::{Function, Reflect};
use lib_core::{Eip1193Provider, Environment, ProviderRpcError};
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// JSON-RPC "internal error", used when a payload cannot cross the JS boundary.
const INTERNAL_ERROR: i64 = -32603;

#[wasm_bindgen(inline_js = "
export function getEthereum() {
    if (typeof window === 'undefined' || !window.ethereum) {
        return null;
    }
    return window.ethereum;
}

export function isMetaMask(provider) {
    return !!provider && provider.isMetaMask === true;
}

export async function ethereumRequest(provider, method, params) {
    if (params === undefined || params === null) {
        return await provider.request({ method });
    }
    return await provider.request({ method, params });
}

export function onEthereumEvent(provider, event, handler) {
    if (provider && typeof provider.on === 'function') {
        provider.on(event, handler);
    }
}

export function offEthereumEvent(provider, event, handler) {
    if (provider && typeof provider.removeListener === 'function') {
        provider.removeListener(event, handler);
    }
}
")]
extern "C" {
    #[wasm_bindgen(js_name = getEthereum)]
    fn get_ethereum() -> JsValue;

    #[wasm_bindgen(js_name = isMetaMask)]
    pub fn is_metamask(provider: &JsValue) -> bool;

    #[wasm_bindgen(js_name = ethereumRequest, catch)]
    async fn ethereum_request(provider: &JsValue, method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = onEthereumEvent)]
    pub fn on_ethereum_event(provider: &JsValue, event: &str, handler: &Function);

    #[wasm_bindgen(js_name = offEthereumEvent)]
    pub fn off_ethereum_event(provider: &JsValue, event: &str, handler: &Function);
}

/// The injected provider object, if the page has one.
pub fn ethereum() -> Option<JsValue> {
    let raw = get_ethereum();
    if raw.is_null() || raw.is_undefined() {
        None
    } else {
        Some(raw)
    }
}

/// Whether the injected provider identifies as MetaMask.
pub fn is_metamask_installed() -> bool {
    ethereum().map(|raw| is_metamask(&raw)).unwrap_or(false)
}

/// `window.ethereum` as an [`Eip1193Provider`].
#[derive(Clone)]
pub struct InjectedProvider {
    raw: JsValue,
}

impl InjectedProvider {
    pub fn new(raw: JsValue) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &JsValue {
        &self.raw
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for InjectedProvider {
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ProviderRpcError> {
        let params = match params {
            Some(params) => params
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| ProviderRpcError::new(INTERNAL_ERROR, e.to_string()))?,
            None => JsValue::UNDEFINED,
        };

        log::debug!("EIP-1193 request: {}", method);
        let result = ethereum_request(&self.raw, method, params)
            .await
            .map_err(rpc_error)?;

        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderRpcError::new(INTERNAL_ERROR, e.to_string()))
    }
}

/// Read `{code, message}` off a rejected request.
fn rpc_error(err: JsValue) -> ProviderRpcError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64)
        .unwrap_or(INTERNAL_ERROR);

    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("Provider error: {:?}", err));

    ProviderRpcError::new(code, message)
}

/// Reads `window.ethereum` each time it is asked.
#[derive(Clone, Copy, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn injected_provider(&self) -> Option<Rc<dyn Eip1193Provider>> {
        ethereum().map(|raw| Rc::new(InjectedProvider::new(raw)) as Rc<dyn Eip1193Provider>)
    }
}
