use anyhow::anyhow;
use daylist_core::store::{
  KeyValueStore,
  MemoryStore
};
use daylist_core::theme::EffectiveTheme;
use wasm_bindgen::JsValue;

const PREFERS_DARK_QUERY: &str =
  "(prefers-color-scheme: dark)";

/// `localStorage` when the browser grants it, otherwise a per-tab memory
/// store so the app keeps working (private mode, disabled storage).
#[derive(Debug)]
pub enum BrowserStore {
  Local(web_sys::Storage),
  Memory(MemoryStore)
}

impl BrowserStore {
  pub fn open() -> Self {
    match web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    ) {
      | Some(storage) => Self::Local(storage),
      | None => {
        tracing::warn!(
          "localStorage unavailable; \
           changes will not survive a \
           reload"
        );
        Self::Memory(MemoryStore::new())
      }
    }
  }
}

impl KeyValueStore for BrowserStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    match self {
      | Self::Local(storage) => storage
        .get_item(key)
        .map_err(|error| js_error("getItem", key, &error)),
      | Self::Memory(memory) => {
        memory.get(key)
      }
    }
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match self {
      | Self::Local(storage) => storage
        .set_item(key, value)
        .map_err(|error| js_error("setItem", key, &error)),
      | Self::Memory(memory) => {
        memory.set(key, value)
      }
    }
  }
}

fn js_error(
  op: &str,
  key: &str,
  error: &JsValue
) -> anyhow::Error {
  anyhow!(
    "localStorage.{op}({key:?}) failed: \
     {error:?}"
  )
}

pub fn prefers_dark_scheme() -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
    })
    .is_some_and(|query| query.matches())
}

/// Calls `on_change` whenever the host color scheme flips. The listener is
/// removed when the returned guard drops.
pub fn watch_color_scheme<F>(
  on_change: F
) -> Option<gloo::events::EventListener>
where
  F: Fn(bool) + 'static
{
  let query = web_sys::window()?
    .match_media(PREFERS_DARK_QUERY)
    .ok()
    .flatten()?;
  let listener =
    gloo::events::EventListener::new(
      &query,
      "change",
      move |_| {
        on_change(prefers_dark_scheme())
      }
    );
  Some(listener)
}

/// Mirrors the effective theme onto `<html class="dark">` so page-level
/// styles outside the app root follow it too.
pub fn apply_document_theme(
  theme: EffectiveTheme
) {
  let Some(root) = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.document_element()
    })
  else {
    return;
  };

  if let Err(error) = root
    .class_list()
    .toggle_with_force("dark", theme.is_dark())
  {
    tracing::warn!(
      ?error,
      "failed toggling dark class"
    );
  }
}
