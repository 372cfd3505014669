use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::Context;
use tracing::{
  debug,
  warn
};

use crate::config::StorageConfig;
use crate::task::Task;
use crate::theme::ThemePreference;

/// Client-local string slots that survive a reload.
///
/// Browser `localStorage` is the production implementation; it lives in the
/// frontend crate so this one stays free of `web_sys`.
pub trait KeyValueStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// In-process store. Backs the tests and stands in for `localStorage` when
/// the browser refuses access to it.
#[derive(Debug, Default)]
pub struct MemoryStore {
  slots: RefCell<BTreeMap<String, String>>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_slot(
    self,
    key: &str,
    value: &str
  ) -> Self {
    self
      .slots
      .borrow_mut()
      .insert(key.to_string(), value.to_string());
    self
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<String> {
    self.slots.borrow().get(key).cloned()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.raw(key))
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .slots
      .borrow_mut()
      .insert(key.to_string(), value.to_string());
    Ok(())
  }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore
  for &S
{
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    (**self).get(key)
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    (**self).set(key, value)
  }
}

/// Typed access to the `tasks` and `theme` slots of a [`KeyValueStore`].
#[derive(Debug)]
pub struct PersistentStore<S> {
  store:     S,
  tasks_key: String,
  theme_key: String
}

impl<S: KeyValueStore> PersistentStore<S> {
  pub fn new(
    store: S,
    storage: &StorageConfig
  ) -> Self {
    Self {
      store,
      tasks_key: storage.tasks_key.clone(),
      theme_key: storage.theme_key.clone()
    }
  }

  /// An absent slot is an empty list, not an error.
  #[tracing::instrument(skip(self), fields(key = %self.tasks_key))]
  pub fn load_tasks(
    &self
  ) -> anyhow::Result<Vec<Task>> {
    let Some(raw) = self
      .store
      .get(&self.tasks_key)
      .with_context(|| {
        format!(
          "failed reading slot {}",
          self.tasks_key
        )
      })?
    else {
      debug!("no stored tasks");
      return Ok(vec![]);
    };

    let tasks: Vec<Task> =
      serde_json::from_str(&raw)
        .with_context(|| {
          format!(
            "failed parsing slot {}",
            self.tasks_key
          )
        })?;
    debug!(
      count = tasks.len(),
      "loaded tasks"
    );
    Ok(tasks)
  }

  #[tracing::instrument(skip(self, tasks), fields(key = %self.tasks_key, count = tasks.len()))]
  pub fn save_tasks(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let json = serde_json::to_string(tasks)
      .context("failed serializing tasks")?;
    self
      .store
      .set(&self.tasks_key, &json)
      .with_context(|| {
        format!(
          "failed writing slot {}",
          self.tasks_key
        )
      })
  }

  /// `Ok(None)` when nothing usable is stored.
  #[tracing::instrument(skip(self), fields(key = %self.theme_key))]
  pub fn load_theme(
    &self
  ) -> anyhow::Result<Option<ThemePreference>>
  {
    let stored = self
      .store
      .get(&self.theme_key)
      .with_context(|| {
        format!(
          "failed reading slot {}",
          self.theme_key
        )
      })?;

    match stored.as_deref() {
      | None => Ok(None),
      | Some(raw) => {
        let theme =
          ThemePreference::from_key(
            raw.trim()
          );
        if theme.is_none() {
          warn!(
            raw,
            "ignoring unknown stored theme"
          );
        }
        Ok(theme)
      }
    }
  }

  #[tracing::instrument(skip(self), fields(key = %self.theme_key))]
  pub fn save_theme(
    &self,
    theme: ThemePreference
  ) -> anyhow::Result<()> {
    self
      .store
      .set(&self.theme_key, theme.as_key())
      .with_context(|| {
        format!(
          "failed writing slot {}",
          self.theme_key
        )
      })
  }
}
