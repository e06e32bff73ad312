use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use crate::app_state::{open_overlay, use_app_state, use_lang, Overlay};
use crate::i18n::{use_i18n, t};
use crate::icons::{close_icon, globe_icon, menu_icon};
use crate::langs::toggle_locale;
use webdata::site::routes::section_href;

#[component]
pub fn MainTopNav() -> impl IntoView {
    let i18n = use_i18n();
    let state = use_app_state();
    let lang = use_lang();
    let menu_open = Memo::new(move |_| state.site.with(|s| s.menu_open));

    // Any route or fragment change closes the mobile menu.
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        location.hash.track();
        if state.site.with_untracked(|s| s.menu_open) {
            state.site.update(|s| s.navigated());
        }
    });

    let toggle_language = move |_| {
        toggle_locale(i18n, &state);
    };
    let volunteer = move |_| {
        state.site.update(|s| s.navigated());
        open_overlay(state, Overlay::Volunteer);
    };

    let links = move || view! {
        <A href=section_href("home") attr:class="hover:text-teal-200">{t!(i18n, nav_home)}</A>
        <A href=section_href("about") attr:class="hover:text-teal-200">{t!(i18n, nav_about)}</A>
        <A href=section_href("programs") attr:class="hover:text-teal-200">{t!(i18n, nav_programs)}</A>
        <A href=section_href("impact") attr:class="hover:text-teal-200">{t!(i18n, nav_impact)}</A>
        <A href="/gallery" attr:class="hover:text-teal-200">{t!(i18n, nav_gallery)}</A>
        <A href="/analytics" attr:class="hover:text-teal-200">{t!(i18n, nav_analytics)}</A>
        <A href=section_href("contact") attr:class="hover:text-teal-200">{t!(i18n, nav_contact)}</A>
    };

    view! {
        {/* ==== TOP BAR ==== */}
        <div class="sticky top-0 z-50 px-4 py-2 text-white bg-teal-700 shadow top-bar">
            <div class="container flex items-center mx-auto">
                <h1 class="mr-6 text-xl font-bold"><A href="/">{t!(i18n, site_title)}</A></h1>

                <nav class="hidden space-x-6 lg:flex">
                    {links}
                </nav>

                <div class="flex items-center ml-auto space-x-2">
                    <button class="hidden text-teal-800 bg-white border-white btn btn-sm md:inline-flex" on:click=volunteer>
                        {t!(i18n, volunteer_cta)}
                    </button>
                    <button class="text-white border-white btn btn-outline btn-sm" on:click=toggle_language>
                        {globe_icon()}
                        <span>{move || lang.get().switch_label()}</span>
                    </button>
                    {/* Mobile Menu Button */}
                    <button class="text-white border-white btn btn-outline btn-sm lg:hidden"
                        on:click=move |_| state.site.update(|s| s.toggle_menu())>
                        {move || if menu_open.get() { close_icon().into_any() } else { menu_icon().into_any() }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="flex flex-col py-2 space-y-2 border-t border-teal-600 lg:hidden">
                    {links}
                    <button class="text-teal-800 bg-white btn btn-sm" on:click=volunteer>
                        {t!(i18n, volunteer_cta)}
                    </button>
                </nav>
            </Show>
        </div>
    }
}
