//! HTTP data source for the currency catalog, balances and live rates

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_core::MarketData;
use serde::de::DeserializeOwned;
use shared::dto::currency::{
    Asset, CurrenciesResponse, Currency, ExchangeRate, LiveRatesResponse, WalletBalanceResponse,
};

pub struct HttpMarketData {
    currencies_url: String,
    balances_url: String,
    rates_url: String,
}

impl HttpMarketData {
    pub fn new(
        currencies_url: impl Into<String>,
        balances_url: impl Into<String>,
        rates_url: impl Into<String>,
    ) -> Self {
        Self {
            currencies_url: currencies_url.into(),
            balances_url: balances_url.into(),
            rates_url: rates_url.into(),
        }
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request to {} failed: {:?}", url, e))?;

    if !response.ok() {
        return Err(format!("{} returned status {}", url, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse {}: {:?}", url, e))
}

#[async_trait(?Send)]
impl MarketData for HttpMarketData {
    async fn currencies(&self) -> Result<Vec<Currency>, String> {
        let body: CurrenciesResponse = fetch_json(&self.currencies_url).await?;
        Ok(body.currencies)
    }

    async fn balances(&self) -> Result<Vec<Asset>, String> {
        let body: WalletBalanceResponse = fetch_json(&self.balances_url).await?;
        if !body.warning.is_empty() {
            log::warn!("Balance service: {}", body.warning);
        }
        Ok(body.wallet)
    }

    async fn rates(&self) -> Result<Vec<ExchangeRate>, String> {
        let body: LiveRatesResponse = fetch_json(&self.rates_url).await?;
        if !body.warning.is_empty() {
            log::warn!("Rate service: {}", body.warning);
        }
        Ok(body.tiers)
    }
}
