use leptos::prelude::*;
use leptos_router::components::A;
use crate::i18n::{use_i18n, t};

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="container flex flex-col items-center p-16 mx-auto text-center">
            <h2 class="mb-4 text-6xl font-bold text-gray-800">"404"</h2>
            <p class="mb-2 text-2xl">{t!(i18n, not_found_title)}</p>
            <p class="mb-8 text-gray-600">{t!(i18n, not_found_body)}</p>
            <A href="/" attr:class="btn btn-accent">{t!(i18n, back_home)}</A>
        </div>
    }
}
