use leptos::prelude::*;
use leptos_i18n::I18nContext;
use crate::i18n::{use_i18n, I18nKeys, Locale};
use crate::app_state::AppState;
use webdata::site::i18n::Lang;

pub const LOCALE_KEY: &str = "locale";

pub fn to_lang(locale: Locale) -> Lang {
    match locale {
        Locale::en => Lang::En,
        Locale::bn => Lang::Bn,
    }
}

pub fn to_locale(lang: Lang) -> Locale {
    match lang {
        Lang::En => Locale::en,
        Lang::Bn => Locale::bn,
    }
}

/// Saved choice first, then the browser language, then English.
pub fn initial_lang() -> Lang {
    let Some(window) = web_sys::window() else {
        return Lang::En;
    };
    let saved = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(LOCALE_KEY).ok().flatten())
        .and_then(|code| Lang::from_code(&code));
    saved
        .or_else(|| window.navigator().language().and_then(|code| Lang::from_code(&code)))
        .unwrap_or_default()
}

pub fn get_locale() -> (I18nContext<Locale, I18nKeys>, Lang) {
    let i18n = use_i18n();
    let lang = initial_lang();
    i18n.set_locale(to_locale(lang));
    (i18n, lang)
}

/// Flips the language everywhere: translation table, site state and the
/// saved preference.
pub fn toggle_locale(i18n: I18nContext<Locale, I18nKeys>, state: &AppState) -> Lang {
    let mut lang = Lang::En;
    state.site.update(|site| lang = site.toggle_lang());
    i18n.set_locale(to_locale(lang));

    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(LOCALE_KEY, lang.code());
        }
    }
    leptos::logging::log!("Language switched to {}", lang.code());
    lang
}
