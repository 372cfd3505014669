use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  debug,
  error
};

use crate::task::{
  Period,
  Priority
};
use crate::theme::ThemePreference;

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub tasks_key: String,
  pub theme_key: String
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      tasks_key: "tasks".to_string(),
      theme_key: "theme".to_string()
    }
  }
}

/// Values the add form resets to and the theme used before the user picks
/// one.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct DefaultsConfig {
  pub priority: Priority,
  pub period:   Period,
  pub theme:    ThemePreference
}

impl Default for DefaultsConfig {
  fn default() -> Self {
    Self {
      priority: Priority::Medium,
      period:   Period::Morning,
      theme:    ThemePreference::System
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  pub title:         String,
  pub empty_message: String
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      title:         "My To-Do List"
        .to_string(),
      empty_message: "No tasks found."
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Default,
  Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub storage:  StorageConfig,
  pub defaults: DefaultsConfig,
  pub ui:       UiConfig
}

impl AppConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let cfg: AppConfig = toml::from_str(raw)
      .context("failed parsing config")?;
    cfg.validate()?;
    debug!(?cfg, "parsed config");
    Ok(cfg)
  }

  /// Like [`AppConfig::from_toml_str`], but logs and falls back to the
  /// built-in defaults instead of failing.
  pub fn from_toml_str_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        error!(
          %error,
          "invalid config; using defaults"
        );
        Self::default()
      }
    }
  }

  fn validate(&self) -> anyhow::Result<()> {
    let storage = &self.storage;
    if storage.tasks_key.trim().is_empty()
      || storage.theme_key.trim().is_empty()
    {
      return Err(anyhow!(
        "storage keys must not be empty"
      ));
    }
    if storage.tasks_key == storage.theme_key
    {
      return Err(anyhow!(
        "storage.tasks_key and \
         storage.theme_key must differ \
         (both are {:?})",
        storage.tasks_key
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::AppConfig;
  use crate::task::{
    Period,
    Priority
  };
  use crate::theme::ThemePreference;

  #[test]
  fn partial_file_keeps_remaining_defaults()
  {
    let cfg = AppConfig::from_toml_str(
      r#"
        [defaults]
        priority = "high"

        [ui]
        title = "Today"
      "#
    )
    .expect("parse config");

    assert_eq!(
      cfg.defaults.priority,
      Priority::High
    );
    assert_eq!(
      cfg.defaults.period,
      Period::Morning
    );
    assert_eq!(
      cfg.defaults.theme,
      ThemePreference::System
    );
    assert_eq!(cfg.ui.title, "Today");
    assert_eq!(
      cfg.ui.empty_message,
      "No tasks found."
    );
    assert_eq!(cfg.storage.tasks_key, "tasks");
  }

  #[test]
  fn rejects_colliding_storage_keys() {
    let err = AppConfig::from_toml_str(
      r#"
        [storage]
        tasks_key = "slot"
        theme_key = "slot"
      "#
    )
    .expect_err("colliding keys");
    assert!(
      err.to_string().contains("must differ")
    );
  }

  #[test]
  fn broken_config_falls_back_to_defaults()
  {
    let cfg =
      AppConfig::from_toml_str_or_default(
        "[defaults]\npriority = \"urgent\""
      );
    assert_eq!(cfg, AppConfig::default());
  }
}
