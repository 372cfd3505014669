mod storage;

use daylist_core::config::AppConfig;
use daylist_core::filter::FilterState;
use daylist_core::reorder::DragGesture;
use daylist_core::repository::{
  TaskAction,
  TaskRepository
};
use daylist_core::store::PersistentStore;
use daylist_core::task::{
  Period,
  Priority,
  TaskId
};
use daylist_core::theme::ThemePreference;
use gloo::console::log;
use yew::{
  Callback,
  Html,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_state
};

use self::storage::{
  BrowserStore,
  apply_document_theme,
  prefers_dark_scheme,
  watch_color_scheme
};
use crate::components::{
  FilterBar,
  TaskForm,
  TaskList,
  ThemeSelect
};

const APP_CONFIG_TOML: &str =
  include_str!("../assets/daylist.toml");

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    AppConfig::from_toml_str_or_default(
      APP_CONFIG_TOML
    )
  });

  let repo = {
    let storage = config.storage.clone();
    use_mut_ref(move || {
      TaskRepository::open(
        PersistentStore::new(
          BrowserStore::open(),
          &storage
        )
      )
    })
  };

  let tasks =
    use_state(|| repo.borrow().tasks().to_vec());
  let filter = use_state(FilterState::default);
  let gesture = use_state(DragGesture::default);
  let prefers_dark =
    use_state(prefers_dark_scheme);
  let theme = {
    let repo = repo.clone();
    let fallback = config.defaults.theme;
    use_state(move || {
      match repo.borrow().store().load_theme() {
        | Ok(stored) => {
          stored.unwrap_or(fallback)
        }
        | Err(error) => {
          tracing::error!(
            %error,
            "failed loading theme preference"
          );
          fallback
        }
      }
    })
  };

  {
    let prefers_dark = prefers_dark.clone();
    use_effect_with((), move |_| {
      let listener =
        watch_color_scheme(move |dark| {
          ui_debug(
            "color-scheme",
            if dark { "dark" } else { "light" }
          );
          prefers_dark.set(dark);
        });
      move || drop(listener)
    });
  }

  let effective = theme.resolve(*prefers_dark);
  use_effect_with(effective, |effective| {
    apply_document_theme(*effective);
  });

  let dispatch = {
    let repo = repo.clone();
    let tasks = tasks.clone();
    Callback::from(move |action: TaskAction| {
      ui_debug(
        "dispatch",
        &format!("{action:?}")
      );
      let changed =
        repo.borrow_mut().apply(action);
      if changed {
        tasks.set(
          repo.borrow().tasks().to_vec()
        );
      }
    })
  };

  let on_add = {
    let dispatch = dispatch.clone();
    Callback::from(
      move |(title, priority, period): (
        String,
        Priority,
        Period
      )| {
        dispatch.emit(TaskAction::Add {
          title,
          priority,
          period
        });
      }
    )
  };

  let on_toggle = {
    let dispatch = dispatch.clone();
    Callback::from(move |id: TaskId| {
      dispatch.emit(TaskAction::Toggle(id))
    })
  };

  let on_delete = {
    let dispatch = dispatch.clone();
    Callback::from(move |id: TaskId| {
      dispatch.emit(TaskAction::Remove(id))
    })
  };

  let on_drag_start = {
    let gesture = gesture.clone();
    Callback::from(move |id: TaskId| {
      gesture.set(DragGesture::start(id));
    })
  };

  let on_drag_over = {
    let gesture = gesture.clone();
    Callback::from(move |id: TaskId| {
      if gesture.over() != Some(id) {
        gesture.set((*gesture).hover(id));
      }
    })
  };

  let on_drop = {
    let gesture = gesture.clone();
    let dispatch = dispatch.clone();
    Callback::from(
      move |(payload, target): (
        Option<TaskId>,
        TaskId
      )| {
        // The payload covers drags that began before the last render.
        let current = match *gesture {
          | DragGesture::Idle => payload
            .map(DragGesture::start)
            .unwrap_or_default(),
          | dragging => dragging
        };
        let (next, event) =
          current.release(Some(target));
        gesture.set(next);
        if let Some(event) = event {
          dispatch
            .emit(TaskAction::Reorder(event));
        }
      }
    )
  };

  let on_drag_end = {
    let gesture = gesture.clone();
    Callback::from(move |()| {
      gesture.set((*gesture).cancel());
    })
  };

  let on_filter_change = {
    let filter = filter.clone();
    Callback::from(
      move |next: FilterState| {
        ui_debug(
          "filter",
          &format!("{next:?}")
        );
        filter.set(next);
      }
    )
  };

  let on_theme_change = {
    let theme = theme.clone();
    let repo = repo.clone();
    Callback::from(
      move |next: ThemePreference| {
        if let Err(error) = repo
          .borrow()
          .store()
          .save_theme(next)
        {
          tracing::warn!(
            %error,
            "failed persisting theme"
          );
        }
        theme.set(next);
      }
    )
  };

  let visible = daylist_core::filter::visible(
    &tasks, &filter
  );
  let counts = repo.borrow().counts();

  html! {
      <div class={classes!("app", effective.as_class())}>
          <div class="card">
              <header class="header">
                  <h1>{ config.ui.title.clone() }</h1>
                  <ThemeSelect theme={*theme} on_change={on_theme_change} />
              </header>
              <TaskForm
                  default_priority={config.defaults.priority}
                  default_period={config.defaults.period}
                  on_add={on_add}
              />
              <FilterBar filter={*filter} on_change={on_filter_change} />
              <div class="summary">
                  { format!(
                      "{} of {} shown · {} pending · {} done",
                      visible.len(),
                      counts.total,
                      counts.pending,
                      counts.done
                  ) }
              </div>
              <TaskList
                  tasks={visible}
                  empty_message={config.ui.empty_message.clone()}
                  gesture={*gesture}
                  on_toggle={on_toggle}
                  on_delete={on_delete}
                  on_drag_start={on_drag_start}
                  on_drag_over={on_drag_over}
                  on_drop={on_drop}
                  on_drag_end={on_drag_end}
              />
          </div>
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
