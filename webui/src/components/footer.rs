use leptos::prelude::*;
use leptos_router::components::A;
use crate::app_state::use_lang;
use crate::i18n::{use_i18n, t};
use webdata::site::content::PROGRAMS;
use webdata::site::i18n::localize_digits;
use webdata::site::routes::section_href;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let lang = use_lang();
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="mt-16 text-gray-200 bg-gray-900">
            <div class="container grid grid-cols-1 gap-8 p-8 mx-auto md:grid-cols-3">
                <div>
                    <h3 class="mb-2 text-xl font-bold text-white">{t!(i18n, site_title)}</h3>
                    <p class="text-sm">{t!(i18n, footer_tagline)}</p>
                </div>
                <div>
                    <h4 class="mb-2 font-semibold text-white">{t!(i18n, footer_quick_links)}</h4>
                    <ul class="space-y-1 text-sm">
                        <li><A href=section_href("about")>{t!(i18n, nav_about)}</A></li>
                        <li><A href=section_href("programs")>{t!(i18n, nav_programs)}</A></li>
                        <li><A href="/gallery">{t!(i18n, nav_gallery)}</A></li>
                        <li><A href="/analytics">{t!(i18n, nav_analytics)}</A></li>
                    </ul>
                </div>
                <div>
                    <h4 class="mb-2 font-semibold text-white">{t!(i18n, programs_title)}</h4>
                    <ul class="space-y-1 text-sm">
                        {PROGRAMS.iter().map(|p| {
                            let title = p.title;
                            view! { <li>{move || title.get(lang.get())}</li> }
                        }).collect_view()}
                    </ul>
                </div>
            </div>
            <div class="py-4 text-sm text-center border-t border-gray-700">
                {move || localize_digits(&format!("© {}", year), lang.get())}
                " "
                {t!(i18n, site_title)}
                ". "
                {t!(i18n, footer_rights)}
            </div>
        </footer>
    }
}
