//! Wallet picker modal

use leptos::prelude::*;

use crate::state::wallet::{use_wallet_context, WalletContext, WalletOption};

#[component]
pub fn WalletModal() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <Show when=move || wallet_ctx.modal_open.get()>
            <div
                class="modal-backdrop"
                style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.7); display: flex; justify-content: center; align-items: center;"
                on:click=move |_| wallet_ctx.close_modal()
            >
                <div
                    class="card"
                    style="width: 100%; max-width: 400px; background: #000000; border: 1px solid #333333;"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                        "Connect a Wallet"
                    </h2>
                    <div style="display: flex; flex-direction: column; gap: 12px;">
                        {move || {
                            wallet_ctx
                                .wallets()
                                .into_iter()
                                .map(|wallet| wallet_row(wallet_ctx, wallet))
                                .collect_view()
                        }}
                    </div>
                    <button
                        class="btn"
                        style="width: 100%; margin-top: var(--spacing-lg); background: var(--bg-card);"
                        on:click=move |_| wallet_ctx.close_modal()
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}

fn wallet_row(wallet_ctx: WalletContext, wallet: WalletOption) -> AnyView {
    let WalletOption {
        id,
        name,
        icon,
        description,
        installed,
        download_url,
    } = wallet;
    let alt = name.clone();

    match (installed, download_url) {
        (Some(false), Some(url)) => view! {
            <a class="wallet-option" href=url target="_blank" rel="noopener noreferrer">
                <img src=icon alt=alt width="32" height="32"/>
                <span class="wallet-name">{name}</span>
                <span class="wallet-hint">"Install"</span>
            </a>
        }
        .into_any(),
        _ => view! {
            <button class="wallet-option" on:click=move |_| wallet_ctx.connect(id.clone())>
                <img src=icon alt=alt width="32" height="32"/>
                <span class="wallet-name">{name}</span>
                <span class="wallet-hint">{description.unwrap_or_default()}</span>
            </button>
        }
        .into_any(),
    }
}
