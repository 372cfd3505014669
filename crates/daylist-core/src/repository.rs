//! The ordered task collection and every mutation on it.
//!
//! # Invariants
//! - Task ids are unique; loaded data with repeated ids keeps the first.
//! - A mutation that changes the collection writes the whole collection to
//!   the store. A failed write is logged and memory stays authoritative.
//! - Operations on unknown ids and blank titles change nothing.

use std::collections::HashSet;

use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::filter::{
  FilterState,
  visible
};
use crate::reorder::{
  DropEvent,
  apply_drop
};
use crate::store::{
  KeyValueStore,
  PersistentStore
};
use crate::task::{
  Period,
  Priority,
  Task,
  TaskId
};

/// User intent routed through [`TaskRepository::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
  Add {
    title:    String,
    priority: Priority,
    period:   Period
  },
  Toggle(TaskId),
  Remove(TaskId),
  Reorder(DropEvent)
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskCounts {
  pub total:   usize,
  pub pending: usize,
  pub done:    usize
}

#[derive(Debug)]
pub struct TaskRepository<S> {
  tasks: Vec<Task>,
  store: PersistentStore<S>
}

impl<S: KeyValueStore> TaskRepository<S> {
  /// Reads the `tasks` slot once. Unreadable data starts an empty list
  /// rather than failing startup.
  #[tracing::instrument(skip(store))]
  pub fn open(
    store: PersistentStore<S>
  ) -> Self {
    let loaded = match store.load_tasks() {
      | Ok(tasks) => tasks,
      | Err(error) => {
        error!(
          %error,
          "failed loading stored tasks; \
           starting empty"
        );
        vec![]
      }
    };

    let mut seen = HashSet::new();
    let before = loaded.len();
    let tasks: Vec<Task> = loaded
      .into_iter()
      .filter(|task| seen.insert(task.id))
      .collect();
    if tasks.len() != before {
      warn!(
        dropped = before - tasks.len(),
        "dropped tasks with duplicate ids"
      );
    }

    info!(
      count = tasks.len(),
      "opened task repository"
    );
    Self {
      tasks,
      store
    }
  }

  pub fn store(&self) -> &PersistentStore<S> {
    &self.store
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn visible(
    &self,
    filter: &FilterState
  ) -> Vec<Task> {
    visible(&self.tasks, filter)
  }

  pub fn counts(&self) -> TaskCounts {
    let done = self
      .tasks
      .iter()
      .filter(|task| task.done)
      .count();
    TaskCounts {
      total: self.tasks.len(),
      pending: self.tasks.len() - done,
      done
    }
  }

  /// Dispatches an action. Returns whether the collection changed.
  pub fn apply(
    &mut self,
    action: TaskAction
  ) -> bool {
    match action {
      | TaskAction::Add {
        title,
        priority,
        period
      } => {
        self
          .add(&title, priority, period)
          .is_some()
      }
      | TaskAction::Toggle(id) => {
        self.toggle_done(id)
      }
      | TaskAction::Remove(id) => {
        self.remove(id)
      }
      | TaskAction::Reorder(event) => {
        self.reorder(
          event.dragged,
          event.target
        )
      }
    }
  }

  /// Appends a pending task. Blank titles are ignored.
  #[tracing::instrument(skip(self, title))]
  pub fn add(
    &mut self,
    title: &str,
    priority: Priority,
    period: Period
  ) -> Option<TaskId> {
    let title = title.trim();
    if title.is_empty() {
      debug!("ignoring blank title");
      return None;
    }

    let task = Task::new(
      title.to_string(),
      priority,
      period
    );
    let id = task.id;
    self.tasks.push(task);
    debug!(%id, "added task");
    self.persist();
    Some(id)
  }

  #[tracing::instrument(skip(self), fields(id = %id))]
  pub fn toggle_done(
    &mut self,
    id: TaskId
  ) -> bool {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      debug!("toggle on unknown id");
      return false;
    };
    task.done = !task.done;
    debug!(done = task.done, "toggled task");
    self.persist();
    true
  }

  #[tracing::instrument(skip(self), fields(id = %id))]
  pub fn remove(
    &mut self,
    id: TaskId
  ) -> bool {
    let before = self.tasks.len();
    self.tasks.retain(|task| task.id != id);
    if self.tasks.len() == before {
      debug!("remove on unknown id");
      return false;
    }
    self.persist();
    true
  }

  /// Moves `dragged` to `target`'s position in the full collection.
  pub fn reorder(
    &mut self,
    dragged: TaskId,
    target: TaskId
  ) -> bool {
    let moved = apply_drop(
      &mut self.tasks,
      DropEvent {
        dragged,
        target
      }
    );
    if moved {
      self.persist();
    }
    moved
  }

  fn persist(&self) {
    if let Err(error) =
      self.store.save_tasks(&self.tasks)
    {
      warn!(
        %error,
        "failed persisting tasks; keeping \
         in-memory state"
      );
    }
  }
}

#[cfg(test)]
mod tests {
  use anyhow::anyhow;

  use super::{
    TaskAction,
    TaskRepository
  };
  use crate::config::StorageConfig;
  use crate::reorder::DropEvent;
  use crate::store::{
    KeyValueStore,
    MemoryStore,
    PersistentStore
  };
  use crate::task::{
    Period,
    Priority,
    Task
  };

  struct ReadOnlyStore;

  impl KeyValueStore for ReadOnlyStore {
    fn get(
      &self,
      _key: &str
    ) -> anyhow::Result<Option<String>> {
      Ok(None)
    }

    fn set(
      &self,
      _key: &str,
      _value: &str
    ) -> anyhow::Result<()> {
      Err(anyhow!("quota exceeded"))
    }
  }

  fn repo(
    memory: &MemoryStore
  ) -> TaskRepository<&MemoryStore> {
    TaskRepository::open(PersistentStore::new(
      memory,
      &StorageConfig::default()
    ))
  }

  #[test]
  fn blank_titles_are_rejected_without_writing()
  {
    let memory = MemoryStore::new();
    let mut repo = repo(&memory);

    assert_eq!(
      repo.add(
        "",
        Priority::Low,
        Period::Morning
      ),
      None
    );
    assert_eq!(
      repo.add(
        "   ",
        Priority::Low,
        Period::Morning
      ),
      None
    );
    assert!(repo.is_empty());
    assert_eq!(memory.raw("tasks"), None);
  }

  #[test]
  fn add_trims_and_appends_pending_task() {
    let memory = MemoryStore::new();
    let mut repo = repo(&memory);
    repo.add(
      "first",
      Priority::Low,
      Period::Morning
    );
    let id = repo
      .add(
        "  Buy milk ",
        Priority::High,
        Period::Evening
      )
      .expect("task added");

    assert_eq!(repo.len(), 2);
    let last = &repo.tasks()[1];
    assert_eq!(last.id, id);
    assert_eq!(last.title, "Buy milk");
    assert!(!last.done);
    assert!(memory.raw("tasks").is_some());
  }

  #[test]
  fn duplicate_ids_in_storage_keep_first() {
    let task = Task::new(
      "one".to_string(),
      Priority::Medium,
      Period::Morning
    );
    let mut copy = task.clone();
    copy.title = "shadow".to_string();
    let json =
      serde_json::to_string(&[task, copy])
        .expect("serialize");
    let memory = MemoryStore::new()
      .with_slot("tasks", &json);

    let repo = repo(&memory);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.tasks()[0].title, "one");
  }

  #[test]
  fn no_op_actions_report_no_change() {
    let memory = MemoryStore::new();
    let mut repo = repo(&memory);
    let ghost = Task::new(
      "ghost".to_string(),
      Priority::Low,
      Period::Morning
    );

    assert!(!repo.apply(TaskAction::Toggle(
      ghost.id
    )));
    assert!(!repo.apply(TaskAction::Remove(
      ghost.id
    )));
    assert!(!repo.apply(TaskAction::Reorder(
      DropEvent {
        dragged: ghost.id,
        target:  ghost.id
      }
    )));
    assert!(!repo.apply(TaskAction::Add {
      title:    "\t".to_string(),
      priority: Priority::Low,
      period:   Period::Evening
    }));
    assert_eq!(memory.raw("tasks"), None);
  }

  #[test]
  fn write_failures_keep_memory_state() {
    let mut repo =
      TaskRepository::open(PersistentStore::new(
        ReadOnlyStore,
        &StorageConfig::default()
      ));
    let id = repo
      .add(
        "still here",
        Priority::Medium,
        Period::Afternoon
      )
      .expect("task added");
    assert!(repo.toggle_done(id));
    assert_eq!(
      repo.get(id).map(|task| task.done),
      Some(true)
    );
  }

  #[test]
  fn counts_split_pending_and_done() {
    let memory = MemoryStore::new();
    let mut repo = repo(&memory);
    let a = repo
      .add("a", Priority::Low, Period::Morning)
      .expect("a");
    repo.add("b", Priority::Low, Period::Morning);
    repo.add("c", Priority::Low, Period::Morning);
    repo.toggle_done(a);

    let counts = repo.counts();
    assert_eq!(counts.total, 3);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.done, 1);
  }
}
