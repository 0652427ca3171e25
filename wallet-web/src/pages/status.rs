//! Wallet Status Page - address, network and chain switching

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_network;

#[component]
pub fn StatusPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let navigate = use_navigate();

    let on_disconnect = move |_| {
        wallet_ctx.disconnect();
        navigate("/", Default::default());
    };

    let on_chain_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<u64>() {
            Ok(chain_id) => wallet_ctx.switch_chain(chain_id),
            Err(e) => log::warn!("Ignoring chain selection {:?}: {}", value, e),
        }
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px); background: #000000;">
            <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl); background: #000000; border: 1px solid #333333;">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Wallet Status"
                </h1>

                {move || {
                    let state = wallet_ctx.connection.get();
                    let disconnect = on_disconnect.clone();

                    if state.is_connected {
                        let selected = state.chain_id.map(|id| id.to_string()).unwrap_or_default();
                        view! {
                            <div>
                                <div style="background: var(--bg-card); padding: var(--spacing-lg); border-radius: var(--border-radius); border: 1px solid var(--border-color); margin-bottom: var(--spacing-lg);">
                                    <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">
                                        "Wallet Address"
                                    </p>
                                    <p style="font-family: monospace; color: var(--text-primary); word-break: break-all; font-size: 0.9em; margin-bottom: var(--spacing-lg);">
                                        {state.address}
                                    </p>

                                    <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">
                                        "Network"
                                    </p>
                                    <p style="color: var(--price-up); font-weight: bold; margin-bottom: var(--spacing-lg);">
                                        {format_network(state.chain_id)}
                                    </p>

                                    <label style="color: var(--text-secondary); display: block; margin-bottom: var(--spacing-sm);">
                                        "Switch network"
                                    </label>
                                    <select class="chain-select" style="width: 100%;" prop:value=selected on:change=on_chain_change>
                                        {wallet_ctx
                                            .chains()
                                            .into_iter()
                                            .map(|chain| view! { <option value=chain.id.to_string()>{chain.name}</option> })
                                            .collect_view()}
                                    </select>
                                </div>

                                {state.error.map(|message| view! {
                                    <p class="error" style="color: var(--bg-error); margin-bottom: var(--spacing-lg);">{message}</p>
                                })}

                                <button
                                    class="btn"
                                    style="width: 100%; background: var(--bg-error);"
                                    on:click=disconnect
                                >
                                    "Disconnect Wallet"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div>
                                <p style="text-align: center; color: var(--text-secondary); margin-bottom: var(--spacing-lg);">
                                    "No wallet connected"
                                </p>
                                <button
                                    class="btn"
                                    style="width: 100%;"
                                    on:click=move |_| wallet_ctx.open_modal()
                                >
                                    "Connect Wallet"
                                </button>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
