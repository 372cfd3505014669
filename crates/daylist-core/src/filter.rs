use tracing::trace;

use crate::task::{
  Period,
  Priority,
  Task
};

/// Selector value shared by the priority and period dropdowns to mean
/// "do not filter on this field".
pub const ANY_KEY: &str = "any";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum StatusFilter {
  #[default]
  All,
  Pending,
  Done
}

impl StatusFilter {
  pub const ALL: [Self; 3] = [
    Self::All,
    Self::Pending,
    Self::Done
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Pending => "pending",
      | Self::Done => "done"
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
      | Self::All => "All",
      | Self::Pending => "Pending",
      | Self::Done => "Done"
    }
  }

  fn matches(self, done: bool) -> bool {
    match self {
      | Self::All => true,
      | Self::Pending => !done,
      | Self::Done => done
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct FilterState {
  pub priority: Option<Priority>,
  pub period:   Option<Period>,
  pub status:   StatusFilter
}

impl FilterState {
  pub fn matches(
    &self,
    task: &Task
  ) -> bool {
    if let Some(priority) = self.priority
      && task.priority != priority
    {
      return false;
    }

    if let Some(period) = self.period
      && task.period != period
    {
      return false;
    }

    self.status.matches(task.done)
  }

  pub fn is_active(&self) -> bool {
    *self != Self::default()
  }

  pub fn priority_key(
    &self
  ) -> &'static str {
    self
      .priority
      .map_or(ANY_KEY, Priority::as_key)
  }

  pub fn period_key(
    &self
  ) -> &'static str {
    self
      .period
      .map_or(ANY_KEY, Period::as_key)
  }

  /// Applies a dropdown value; unknown keys widen the selector to "any".
  pub fn set_priority_key(
    &mut self,
    key: &str
  ) {
    self.priority = Priority::from_key(key);
  }

  pub fn set_period_key(
    &mut self,
    key: &str
  ) {
    self.period = Period::from_key(key);
  }

  pub fn set_status_key(
    &mut self,
    key: &str
  ) {
    self.status =
      StatusFilter::from_key(key)
        .unwrap_or_default();
  }
}

/// Tasks matching `filter`, in collection order.
pub fn visible(
  tasks: &[Task],
  filter: &FilterState
) -> Vec<Task> {
  let out: Vec<Task> = tasks
    .iter()
    .filter(|task| filter.matches(task))
    .cloned()
    .collect();

  trace!(
    total = tasks.len(),
    shown = out.len(),
    ?filter,
    "computed visible tasks"
  );
  out
}

#[cfg(test)]
mod tests {
  use super::{
    FilterState,
    StatusFilter,
    visible
  };
  use crate::task::{
    Period,
    Priority,
    Task
  };

  fn sample() -> Vec<Task> {
    let mut tasks = vec![
      Task::new(
        "a".to_string(),
        Priority::High,
        Period::Morning
      ),
      Task::new(
        "b".to_string(),
        Priority::Low,
        Period::Evening
      ),
      Task::new(
        "c".to_string(),
        Priority::High,
        Period::Evening
      ),
      Task::new(
        "d".to_string(),
        Priority::Medium,
        Period::Afternoon
      ),
    ];
    tasks[1].done = true;
    tasks[2].done = true;
    tasks
  }

  fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks
      .iter()
      .map(|task| task.title.as_str())
      .collect()
  }

  #[test]
  fn default_filter_shows_everything_in_order()
  {
    let tasks = sample();
    let filter = FilterState::default();
    assert!(!filter.is_active());
    assert_eq!(
      visible(&tasks, &filter),
      tasks
    );
  }

  #[test]
  fn criteria_combine_with_and() {
    let tasks = sample();
    let filter = FilterState {
      priority: Some(Priority::High),
      period:   Some(Period::Evening),
      status:   StatusFilter::Done
    };
    assert_eq!(
      titles(&visible(&tasks, &filter)),
      vec!["c"]
    );

    let pending_high = FilterState {
      priority: Some(Priority::High),
      period:   None,
      status:   StatusFilter::Pending
    };
    assert_eq!(
      titles(&visible(
        &tasks,
        &pending_high
      )),
      vec!["a"]
    );
  }

  #[test]
  fn every_visible_task_matches_and_no_match_is_dropped()
   {
    let tasks = sample();
    for priority in Priority::ALL
      .into_iter()
      .map(Some)
      .chain([None])
    {
      for status in StatusFilter::ALL {
        let filter = FilterState {
          priority,
          period: None,
          status
        };
        let shown = visible(&tasks, &filter);
        let expected: Vec<&Task> = tasks
          .iter()
          .filter(|task| {
            filter.matches(task)
          })
          .collect();
        assert_eq!(
          shown.iter().collect::<Vec<_>>(),
          expected
        );
      }
    }
  }

  #[test]
  fn selector_keys_map_any_to_none() {
    let mut filter = FilterState::default();
    filter.set_priority_key("low");
    filter.set_period_key("afternoon");
    filter.set_status_key("done");
    assert_eq!(
      filter.priority,
      Some(Priority::Low)
    );
    assert_eq!(
      filter.period,
      Some(Period::Afternoon)
    );
    assert_eq!(
      filter.status,
      StatusFilter::Done
    );
    assert!(filter.is_active());

    filter.set_priority_key("any");
    filter.set_period_key("any");
    filter.set_status_key("bogus");
    assert_eq!(filter.priority_key(), "any");
    assert_eq!(filter.period_key(), "any");
    assert_eq!(
      filter.status,
      StatusFilter::All
    );
    assert!(!filter.is_active());
  }
}
