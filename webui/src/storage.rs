use anyhow::{anyhow, Result};
use webdata::site::modal::SessionStore;

fn session_storage() -> Option<web_sys::Storage> {
  web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn get_session_item(key: &str) -> Option<String> {
  session_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_session_item(key: &str, value: &str) -> Result<()> {
  let storage = session_storage().ok_or_else(|| anyhow!("sessionStorage unavailable"))?;
  storage
    .set_item(key, value)
    .map_err(|e| anyhow!("Failed to store {key}: {e:?}"))
}

/// `sessionStorage` of the current tab. Flags set here are gone once the
/// browser session ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
  fn get(&self, key: &str) -> Option<String> {
    get_session_item(key)
  }

  fn set(&mut self, key: &str, value: &str) {
    if let Err(e) = set_session_item(key, value) {
      leptos::logging::error!("{}", e);
    }
  }
}
