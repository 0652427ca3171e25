//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Wallet"</span>
                </A>
                <ConnectButton/>
            </div>
        </nav>
    }
}

/// Opens the picker when idle, shows the short address once connected.
#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    move || {
        let state = wallet_ctx.connection.get();
        if state.is_connected {
            let label = state
                .address
                .as_deref()
                .map(truncate_address)
                .unwrap_or_default();
            view! {
                <A href="/status" attr:class="nav-link-clean">
                    <span class="btn btn-connected" style="font-family: monospace;">{label}</span>
                </A>
            }
            .into_any()
        } else if state.is_connecting {
            view! {
                <button class="btn" disabled=true>
                    "Connecting..."
                </button>
            }
            .into_any()
        } else {
            view! {
                <button class="btn" on:click=move |_| wallet_ctx.open_modal()>
                    "Connect Wallet"
                </button>
            }
            .into_any()
        }
    }
}
