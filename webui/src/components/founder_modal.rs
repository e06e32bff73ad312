use leptos::prelude::*;
use crate::app_state::{auto_open_founder, close_overlay, use_app_state, use_modal, Overlay};
use crate::i18n::{use_i18n, t};
use crate::icons::close_icon;
use crate::storage::BrowserSession;
use webdata::site::modal::FounderGate;

/// Founder message overlay. Opens by itself once per browser session.
#[component]
pub fn FounderModal() -> impl IntoView {
    let i18n = use_i18n();
    let state = use_app_state();
    let modal = use_modal(Overlay::Founder);

    let timer = FounderGate::auto_open_delay(&BrowserSession)
        .and_then(|delay| set_timeout_with_handle(move || auto_open_founder(state), delay).ok());
    on_cleanup(move || {
        if let Some(handle) = timer {
            handle.clear();
        }
    });

    let close = move |_| close_overlay(state, Overlay::Founder);

    view! {
        <Show when=move || modal.get().is_mounted()>
            <div
                class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/60 transition-opacity duration-300"
                class:opacity-0=move || !modal.get().is_visible()
                class:opacity-100=move || modal.get().is_visible()
                on:click=close
            >
                <div
                    class="relative w-full max-w-2xl p-8 bg-white shadow-2xl rounded-2xl transition-transform duration-300"
                    class:scale-95=move || !modal.get().is_visible()
                    class:scale-100=move || modal.get().is_visible()
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="absolute btn btn-sm btn-circle btn-ghost right-3 top-3" aria-label="close" on:click=close>
                        {close_icon()}
                    </button>
                    <h2 class="mb-4 text-3xl font-bold text-teal-700">{t!(i18n, founder_title)}</h2>
                    <p class="mb-6 leading-relaxed text-gray-700">{t!(i18n, founder_body)}</p>
                    <p class="italic text-right text-gray-600">{t!(i18n, founder_signature)}</p>
                    <div class="flex justify-end mt-6">
                        <button class="btn btn-accent" on:click=close>{t!(i18n, close)}</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
