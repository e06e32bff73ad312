leptos_i18n::load_locales!();
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::{use_location, use_navigate}, path};
use gloo::timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use webdata::site::routes::{fragment_target, FragmentAction};
use crate::app_state::{provide_app_state, use_lang};
use crate::i18n::*; // `i18n` module created by the macro above
use crate::langs::{get_locale, to_lang};
// Modules
mod api;
mod app_state;
mod components;
mod icons;
mod langs;
mod pages;
mod storage;

// Top-Level pages
use crate::components::footer::Footer;
use crate::components::founder_modal::FounderModal;
use crate::components::main_top_nav::MainTopNav;
use crate::components::volunteer_modal::VolunteerModal;
use crate::pages::analytics::AnalyticsView;
use crate::pages::gallery::GalleryView;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

fn scroll_to(id: String) {
    // Give the home page a moment to render its sections.
    Timeout::new(100, move || {
        if let Some(el) = gloo::utils::document().get_element_by_id(&id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            let _ = el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }).forget();
}

/// Re-dispatches `#fragment` navigation: scroll on the home page, redirect
/// to `/#fragment` from anywhere else.
#[component]
fn FragmentNavigation() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move |_| {
        let path = location.pathname.get();
        let hash = location.hash.get();
        match fragment_target(&path, &hash) {
            FragmentAction::ScrollTo(id) => scroll_to(id),
            FragmentAction::Redirect(url) => navigate(&url, Default::default()),
            FragmentAction::None => {}
        }
    });
}

#[component]
fn Shell() -> impl IntoView {
    let lang = use_lang();
    view! {
        <div class=move || format!("flex flex-col min-h-screen {}", lang.get().font_class())>
            <Html attr:lang=move || lang.get().code() attr:dir="ltr" attr:data-theme="light" />
            <MainTopNav />
            <FragmentNavigation />
            <main class="flex-1">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/analytics") view=AnalyticsView />
                    <Route path=path!("/gallery") view=GalleryView />
                </Routes>
            </main>
            <Footer />
            <FounderModal />
            <VolunteerModal />
        </div>
    }
}

/// Provides i18n, shared site state and the router.
#[component]
pub fn App() -> impl IntoView {

    let git_sha = match option_env!("VERGEN_GIT_SHA") { Some(s) => s, None => "unknown" };
    let git_describe = match option_env!("VERGEN_GIT_DESCRIBE") { Some(s) => s, None => "unknown" };
    let git_commit_timestamp = match option_env!("VERGEN_GIT_COMMIT_TIMESTAMP") { Some(s) => s, None => "unknown" };
    let git_dirty = match option_env!("VERGEN_GIT_DIRTY") { Some(s) => s, None => "unknown" };
    let opt_level = match option_env!("VERGEN_CARGO_OPT_LEVEL") { Some(s) => s, None => "unknown" };
    let build_info = serde_json::json!({
        "SHA": git_sha,
        "DESCRIBE": git_describe,
        "COMMIT_TIMESTAMP": git_commit_timestamp,
        "DIRTY": git_dirty,
        "OPT_LEVEL": opt_level,
        "SHEETS_API_KEY": option_env!("GOOGLE_SHEETS_API_KEY").is_some(),
    })
    .to_string();

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <I18nContextProvider>
            <AppBody />
        </I18nContextProvider>
        <script>{format!("window.buildInfo={};", build_info)}</script>
    }
}

#[component]
fn AppBody() -> impl IntoView {
    // Set initial locale from localStorage or browser language
    let (i18n, lang) = get_locale();
    let state = provide_app_state(lang);

    // The translation table and the site state must agree on the language.
    Effect::new(move |_| {
        let lang = to_lang(i18n.get_locale());
        if state.site.with_untracked(|s| s.lang) != lang {
            state.site.update(|s| s.lang = lang);
        }
    });

    view! {
        <Title text=move || t_string!(i18n, site_title) />
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Router>
            <Shell />
        </Router>
    }
}
