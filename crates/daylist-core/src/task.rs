use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

pub type TaskId = Uuid;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  High,
  Medium,
  Low
}

impl Priority {
  pub const ALL: [Self; 3] = [
    Self::High,
    Self::Medium,
    Self::Low
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::High => "high",
      | Self::Medium => "medium",
      | Self::Low => "low"
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
      | Self::High => "High",
      | Self::Medium => "Medium",
      | Self::Low => "Low"
    }
  }

  /// Badge class used by the row view; one color per level.
  pub fn badge_class(
    self
  ) -> &'static str {
    match self {
      | Self::High => "badge priority-high",
      | Self::Medium => {
        "badge priority-medium"
      }
      | Self::Low => "badge priority-low"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Period {
  Morning,
  Afternoon,
  Evening
}

impl Period {
  pub const ALL: [Self; 3] = [
    Self::Morning,
    Self::Afternoon,
    Self::Evening
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Morning => "morning",
      | Self::Afternoon => "afternoon",
      | Self::Evening => "evening"
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
      | Self::Morning => "Morning",
      | Self::Afternoon => "Afternoon",
      | Self::Evening => "Evening"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:       TaskId,
  pub title:    String,
  pub priority: Priority,
  pub period:   Period,
  #[serde(default)]
  pub done:     bool
}

impl Task {
  /// Builds a pending task with a fresh id. Callers are expected to have
  /// trimmed and validated `title` already.
  pub fn new(
    title: String,
    priority: Priority,
    period: Period
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      title,
      priority,
      period,
      done: false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Period,
    Priority,
    Task
  };

  #[test]
  fn keys_round_trip_and_reject_unknown()
  {
    for priority in Priority::ALL {
      assert_eq!(
        Priority::from_key(
          priority.as_key()
        ),
        Some(priority)
      );
    }
    for period in Period::ALL {
      assert_eq!(
        Period::from_key(period.as_key()),
        Some(period)
      );
    }
    assert_eq!(
      Priority::from_key("urgent"),
      None
    );
    assert_eq!(
      Period::from_key("any"),
      None
    );
  }

  #[test]
  fn serializes_with_lowercase_variants()
  {
    let task = Task::new(
      "Water plants".to_string(),
      Priority::High,
      Period::Evening
    );
    let value =
      serde_json::to_value(&task)
        .expect("serialize task");

    assert_eq!(value["priority"], "high");
    assert_eq!(value["period"], "evening");
    assert_eq!(value["done"], false);
    assert_eq!(
      value["id"],
      task.id.to_string()
    );
  }

  #[test]
  fn missing_done_flag_defaults_to_pending()
  {
    let raw = r#"{
      "id": "6f1c3f5e-9a43-4c61-8d0f-3b7f3e2a1c11",
      "title": "Stretch",
      "priority": "low",
      "period": "morning"
    }"#;
    let task: Task =
      serde_json::from_str(raw)
        .expect("parse task");
    assert!(!task.done);
    assert_eq!(task.period, Period::Morning);
  }
}
