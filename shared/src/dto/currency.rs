//! # Currency Data Transfer Objects
//!
//! Structures for the auxiliary data shown once a wallet is connected:
//! the currency catalog, the wallet's balances, and tiered exchange rates.
//!
//! ## Endpoints Using These DTOs
//!
//! - `GET <currencies_url>` - [`CurrenciesResponse`]
//! - `GET <balances_url>` - [`WalletBalanceResponse`]
//! - `GET <rates_url>` - [`LiveRatesResponse`]
//!
//! ## Joining
//!
//! The three collections share a currency id: [`Currency::coin_id`],
//! [`Asset::currency`] and [`ExchangeRate::from_currency`]. Use
//! [`merge_currencies`] to left-join balances and rates onto the catalog.
//!
//! ## Example Rates Response
//!
//! ```json
//! {
//!   "ok": true,
//!   "warning": "",
//!   "tiers": [
//!     {
//!       "from_currency": "ETH",
//!       "to_currency": "USD",
//!       "rates": [{ "amount": "1.0", "rate": "3105.24" }],
//!       "time_stamp": 1704067200000
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog entry for a supported currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub coin_id: String,
    pub name: String,
    pub symbol: String,
}

/// Balance held by the connected wallet, keyed by currency id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub currency: String,
    pub amount: f64,
}

/// One tier of an exchange rate (decimal strings, as the rate service sends them).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rate {
    pub amount: String,
    pub rate: String,
}

/// Tiered exchange rate from one currency into another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExchangeRate {
    pub from_currency: String,
    pub to_currency: String,
    pub rates: Vec<Rate>,
    pub time_stamp: i64,
}

impl ExchangeRate {
    /// The first tier's rate, which is what list rows display.
    pub fn headline_rate(&self) -> Option<&str> {
        self.rates.first().map(|tier| tier.rate.as_str())
    }
}

/// Response envelope for the currency catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrenciesResponse {
    pub currencies: Vec<Currency>,
}

/// Response envelope for wallet balances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletBalanceResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub warning: String,
    pub wallet: Vec<Asset>,
}

/// Response envelope for live rates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiveRatesResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub warning: String,
    pub tiers: Vec<ExchangeRate>,
}

/// A catalog currency with whatever balance and rate information matched it.
///
/// Fields from an unmatched side are `None`, never zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyMerged {
    #[serde(flatten)]
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<Vec<Rate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<i64>,
}

impl CurrencyMerged {
    /// First-tier rate into [`CurrencyMerged::to_currency`], if a rate matched.
    pub fn headline_rate(&self) -> Option<&str> {
        self.rates
            .as_ref()
            .and_then(|tiers| tiers.first())
            .map(|tier| tier.rate.as_str())
    }
}

/// Left-join balances and rates onto the currency catalog.
///
/// Catalog order is preserved. When several balances or rates share an id,
/// the last one wins.
pub fn merge_currencies(
    currencies: &[Currency],
    balances: &[Asset],
    rates: &[ExchangeRate],
) -> Vec<CurrencyMerged> {
    let balance_map: HashMap<&str, &Asset> = balances
        .iter()
        .map(|asset| (asset.currency.as_str(), asset))
        .collect();
    let rate_map: HashMap<&str, &ExchangeRate> = rates
        .iter()
        .map(|rate| (rate.from_currency.as_str(), rate))
        .collect();

    currencies
        .iter()
        .map(|currency| {
            let balance = balance_map.get(currency.coin_id.as_str());
            let rate = rate_map.get(currency.coin_id.as_str());
            CurrencyMerged {
                currency: currency.clone(),
                amount: balance.map(|asset| asset.amount),
                to_currency: rate.map(|r| r.to_currency.clone()),
                rates: rate.map(|r| r.rates.clone()),
                time_stamp: rate.map(|r| r.time_stamp),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(id: &str) -> Currency {
        Currency {
            coin_id: id.to_string(),
            name: format!("{} coin", id),
            symbol: id.to_string(),
        }
    }

    #[test]
    fn test_merge_is_anchored_on_catalog() {
        let currencies = vec![currency("BTC"), currency("ETH"), currency("CRO")];
        let balances = vec![
            Asset { currency: "ETH".to_string(), amount: 20.3 },
            Asset { currency: "DAI".to_string(), amount: 854.0 },
        ];
        let rates = vec![ExchangeRate {
            from_currency: "BTC".to_string(),
            to_currency: "USD".to_string(),
            rates: vec![Rate { amount: "1".to_string(), rate: "42000.5".to_string() }],
            time_stamp: 1,
        }];

        let merged = merge_currencies(&currencies, &balances, &rates);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].currency.coin_id, "BTC");
        assert_eq!(merged[0].amount, None);
        assert_eq!(merged[0].to_currency.as_deref(), Some("USD"));
        assert_eq!(merged[0].headline_rate(), Some("42000.5"));

        assert_eq!(merged[1].amount, Some(20.3));
        assert_eq!(merged[1].rates, None);

        assert_eq!(merged[2].amount, None);
        assert_eq!(merged[2].time_stamp, None);
    }

    #[test]
    fn test_merged_serializes_flat_without_absent_fields() {
        let merged = merge_currencies(&[currency("CRO")], &[], &[]);
        let json = serde_json::to_value(&merged[0]).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "coin_id": "CRO", "name": "CRO coin", "symbol": "CRO" })
        );
    }

    #[test]
    fn test_balance_envelope_tolerates_missing_flags() {
        let parsed: WalletBalanceResponse =
            serde_json::from_str(r#"{ "wallet": [{ "currency": "USDT", "amount": 1245 }] }"#)
                .unwrap();
        assert!(!parsed.ok);
        assert_eq!(parsed.wallet[0].amount, 1245.0);
    }
}
