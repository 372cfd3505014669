//! Drag-to-reorder over a filtered view.
//!
//! The list a user drags within is a filtered projection of the full task
//! collection. Because filtering never changes relative order, moving the
//! dragged task to the target's *full-collection* index reorders the visible
//! rows exactly as gestured and leaves every hidden task where it was
//! relative to the other hidden tasks.

use tracing::debug;

use crate::task::{
  Task,
  TaskId
};

/// Terminal event of a drag gesture.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct DropEvent {
  pub dragged: TaskId,
  pub target:  TaskId
}

/// Pointer gesture state for one sortable list.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum DragGesture {
  #[default]
  Idle,
  Dragging {
    dragged: TaskId,
    over:    Option<TaskId>
  }
}

impl DragGesture {
  pub fn start(dragged: TaskId) -> Self {
    Self::Dragging {
      dragged,
      over: None
    }
  }

  pub fn dragged(&self) -> Option<TaskId> {
    match self {
      | Self::Idle => None,
      | Self::Dragging {
        dragged, ..
      } => Some(*dragged)
    }
  }

  pub fn over(&self) -> Option<TaskId> {
    match self {
      | Self::Idle => None,
      | Self::Dragging {
        over, ..
      } => *over
    }
  }

  pub fn hover(self, target: TaskId) -> Self {
    match self {
      | Self::Idle => Self::Idle,
      | Self::Dragging {
        dragged, ..
      } => Self::Dragging {
        dragged,
        over: Some(target)
      }
    }
  }

  pub fn leave(self) -> Self {
    match self {
      | Self::Idle => Self::Idle,
      | Self::Dragging {
        dragged, ..
      } => Self::Dragging {
        dragged,
        over: None
      }
    }
  }

  pub fn cancel(self) -> Self {
    Self::Idle
  }

  /// Ends the gesture. Returns the drop event only when there is a target
  /// distinct from the dragged task.
  pub fn release(
    self,
    target: Option<TaskId>
  ) -> (Self, Option<DropEvent>) {
    let event = match self {
      | Self::Idle => None,
      | Self::Dragging {
        dragged, ..
      } => target
        .filter(|target| *target != dragged)
        .map(|target| {
          DropEvent {
            dragged,
            target
          }
        })
    };
    (Self::Idle, event)
  }
}

/// Removes the element at `from` and reinserts it at `to`.
///
/// Out-of-range indices leave `items` untouched.
pub fn array_move<T>(
  items: &mut Vec<T>,
  from: usize,
  to: usize
) {
  if from == to
    || from >= items.len()
    || to >= items.len()
  {
    return;
  }
  let item = items.remove(from);
  items.insert(to, item);
}

/// Full-collection `(from, to)` indices for a drop, or `None` when the drop
/// is a no-op.
pub fn move_indices(
  tasks: &[Task],
  event: DropEvent
) -> Option<(usize, usize)> {
  if event.dragged == event.target {
    return None;
  }
  let from = tasks
    .iter()
    .position(|t| t.id == event.dragged)?;
  let to = tasks
    .iter()
    .position(|t| t.id == event.target)?;
  Some((from, to))
}

/// Applies a drop to the full collection. Returns whether anything moved.
#[tracing::instrument(skip(tasks), fields(dragged = %event.dragged, target = %event.target))]
pub fn apply_drop(
  tasks: &mut Vec<Task>,
  event: DropEvent
) -> bool {
  let Some((from, to)) =
    move_indices(tasks, event)
  else {
    debug!("ignoring stale or self drop");
    return false;
  };
  array_move(tasks, from, to);
  debug!(from, to, "moved task");
  true
}
