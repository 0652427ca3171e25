//! Balances and rates for the connected wallet

use leptos::prelude::*;
use lib_core::DataStatus;
use shared::dto::currency::CurrencyMerged;
use shared::utils::format_fiat;

use crate::state::wallet::{use_wallet_context, DataView};
use crate::utils::format::format_balance;

#[component]
pub fn CurrencyList() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    move || {
        let DataView { status, rows } = wallet_ctx.data.get();
        match status {
            DataStatus::Idle => view! {
                <p style="text-align: center; color: var(--text-secondary);">
                    "Connect a wallet to see your assets"
                </p>
            }
            .into_any(),
            DataStatus::Loading => view! {
                <p style="text-align: center; color: var(--text-secondary);">
                    "Loading assets, please wait..."
                </p>
            }
            .into_any(),
            DataStatus::Empty => view! {
                <p style="text-align: center; color: var(--text-secondary);">
                    "No assets available"
                </p>
            }
            .into_any(),
            DataStatus::Success => view! {
                <ul class="currency-list" style="list-style: none; padding: 0; margin: 0;">
                    {rows.into_iter().map(currency_row).collect_view()}
                </ul>
            }
            .into_any(),
        }
    }
}

fn currency_row(row: CurrencyMerged) -> impl IntoView {
    let balance = row
        .amount
        .map(format_balance)
        .unwrap_or_else(|| "-".to_string());
    let fiat = match (row.amount, row.to_currency.as_deref(), row.headline_rate()) {
        (Some(amount), Some(to_currency), Some(rate)) => format_fiat(amount, to_currency, rate),
        _ => None,
    }
    .unwrap_or_default();

    view! {
        <li class="currency-row" style="display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid var(--border-color);">
            <div>
                <span class="currency-name" style="color: var(--text-primary);">{row.currency.name}</span>
                " "
                <span class="currency-symbol" style="color: var(--text-secondary);">{row.currency.symbol}</span>
            </div>
            <div style="text-align: right;">
                <div>{balance}</div>
                <div style="color: var(--text-secondary); font-size: 0.9em;">{fiat}</div>
            </div>
        </li>
    }
}
