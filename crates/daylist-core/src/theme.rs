use serde::{
  Deserialize,
  Serialize
};

/// What the user picked. `System` follows the host color scheme.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
  Light,
  Dark,
  #[default]
  System
}

/// What is actually painted.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EffectiveTheme {
  Light,
  Dark
}

impl ThemePreference {
  pub const ALL: [Self; 3] = [
    Self::System,
    Self::Light,
    Self::Dark
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark",
      | Self::System => "system"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|value| value.as_key() == key)
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Light => "Light",
      | Self::Dark => "Dark",
      | Self::System => "System"
    }
  }

  pub fn resolve(
    self,
    prefers_dark: bool
  ) -> EffectiveTheme {
    match self {
      | Self::Light => EffectiveTheme::Light,
      | Self::Dark => EffectiveTheme::Dark,
      | Self::System => {
        if prefers_dark {
          EffectiveTheme::Dark
        } else {
          EffectiveTheme::Light
        }
      }
    }
  }
}

impl EffectiveTheme {
  pub fn is_dark(self) -> bool {
    self == Self::Dark
  }

  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    EffectiveTheme,
    ThemePreference
  };

  #[test]
  fn explicit_choices_ignore_the_environment()
  {
    for prefers_dark in [true, false] {
      assert_eq!(
        ThemePreference::Light
          .resolve(prefers_dark),
        EffectiveTheme::Light
      );
      assert_eq!(
        ThemePreference::Dark
          .resolve(prefers_dark),
        EffectiveTheme::Dark
      );
    }
  }

  #[test]
  fn system_follows_prefers_dark() {
    assert!(
      ThemePreference::System
        .resolve(true)
        .is_dark()
    );
    assert_eq!(
      ThemePreference::System.resolve(false),
      EffectiveTheme::Light
    );
    assert_eq!(
      ThemePreference::default(),
      ThemePreference::System
    );
  }

  #[test]
  fn keys_round_trip() {
    for theme in ThemePreference::ALL {
      assert_eq!(
        ThemePreference::from_key(
          theme.as_key()
        ),
        Some(theme)
      );
    }
    assert_eq!(
      ThemePreference::from_key("night"),
      None
    );
  }
}
