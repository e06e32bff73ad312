use std::time::Duration;
use leptos::prelude::*;
use webdata::site::i18n::Lang;
use webdata::site::modal::{Modal, ENTER_DELAY, TRANSITION};
use webdata::site::SiteState;
use crate::storage::BrowserSession;

// Define your app's shared state
#[derive(Clone, Copy, Debug)]
pub struct AppState {
  pub site: RwSignal<SiteState>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
  Founder,
  Volunteer,
}

fn overlay(site: &mut SiteState, which: Overlay) -> &mut Modal {
  match which {
    Overlay::Founder => &mut site.founder,
    Overlay::Volunteer => &mut site.volunteer,
  }
}

pub fn provide_app_state(lang: Lang) -> AppState {
  let state = AppState { site: RwSignal::new(SiteState::new(lang)) };
  provide_context(state);
  state
}

pub fn use_app_state() -> AppState {
  use_context::<AppState>().expect("AppState to be provided")
}

pub fn use_lang() -> Memo<Lang> {
  let state = use_app_state();
  Memo::new(move |_| state.site.with(|s| s.lang))
}

pub fn use_modal(which: Overlay) -> Memo<Modal> {
  let state = use_app_state();
  Memo::new(move |_| state.site.with(|s| match which {
    Overlay::Founder => s.founder,
    Overlay::Volunteer => s.volunteer,
  }))
}

/// Finishes the running enter/leave phase after `delay`.
fn settle(state: AppState, which: Overlay, delay: Duration) {
  set_timeout(move || state.site.update(|s| overlay(s, which).transition_end()), delay);
}

pub fn open_overlay(state: AppState, which: Overlay) {
  let opened = state.site.try_update(|s| match which {
    Overlay::Founder => s.open_founder(),
    Overlay::Volunteer => s.open_volunteer(),
  }).unwrap_or(false);
  if opened {
    settle(state, which, ENTER_DELAY);
  }
}

pub fn close_overlay(state: AppState, which: Overlay) {
  let mut session = BrowserSession;
  let closing = state.site.try_update(|s| match which {
    Overlay::Founder => {
      let was_open = s.founder.is_mounted();
      s.close_founder(&mut session);
      was_open
    }
    Overlay::Volunteer => s.close_volunteer(),
  }).unwrap_or(false);
  if closing {
    settle(state, which, TRANSITION);
  }
}

/// Auto-close after a successful submit. Returns false when the dialog was
/// closed or reopened in the meantime.
pub fn finish_volunteer(state: AppState, attempt: u32) -> bool {
  let closing = state.site.try_update(|s| s.finish_volunteer(attempt)).unwrap_or(false);
  if closing {
    settle(state, Overlay::Volunteer, TRANSITION);
  }
  closing
}

/// Session-gated automatic open of the founder message.
pub fn auto_open_founder(state: AppState) {
  let mut session = BrowserSession;
  let opened = state.site.try_update(|s| s.auto_open_founder(&mut session)).unwrap_or(false);
  if opened {
    leptos::logging::log!("Founder message shown for this session");
    settle(state, Overlay::Founder, ENTER_DELAY);
  }
}
