//! Home page - connect a wallet and browse its assets

use leptos::prelude::*;

use crate::components::{ConnectButton, CurrencyList};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: flex-start; min-height: calc(100vh - 60px); padding-top: var(--spacing-xl); background: #000000;">
            <div class="card" style="width: 100%; max-width: 520px; padding: var(--spacing-xl); background: #000000; border: 1px solid #333333;">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Assets"
                </h1>

                {move || {
                    wallet_ctx.connection.with(|state| state.error.clone()).map(|message| view! {
                        <p class="error" style="color: var(--bg-error); text-align: center; margin-bottom: var(--spacing-md);">
                            {message}
                        </p>
                    })
                }}

                {move || {
                    if wallet_ctx.is_connected() {
                        view! { <CurrencyList/> }.into_any()
                    } else {
                        view! {
                            <div style="text-align: center;">
                                <p style="color: var(--text-secondary); margin-bottom: var(--spacing-lg);">
                                    "Connect your wallet to view balances and live rates"
                                </p>
                                <ConnectButton/>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
