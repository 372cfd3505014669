use daylist_core::task::{
  Task,
  TaskId
};
use uuid::Uuid;
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:           Task,
  pub is_dragging:    bool,
  pub is_drop_target: bool,
  pub on_toggle:      Callback<TaskId>,
  pub on_delete:      Callback<TaskId>,
  pub on_drag_start:  Callback<TaskId>,
  pub on_drag_over:   Callback<TaskId>,
  /// `(id carried by the drag payload, row dropped on)`.
  pub on_drop:
    Callback<(Option<TaskId>, TaskId)>,
  pub on_drag_end:    Callback<()>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let task_id = props.task.id;

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let _ = data_transfer.set_data(
            "text/plain",
            &task_id.to_string()
          );
          data_transfer
            .set_effect_allowed("move");
        }
        on_drag_start.emit(task_id);
      }
    )
  };

  let ondragover = {
    let on_drag_over =
      props.on_drag_over.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drag_over.emit(task_id);
      }
    )
  };

  let ondrop = {
    let on_drop = props.on_drop.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        let dragged = event
          .data_transfer()
          .and_then(|data_transfer| {
            match data_transfer
              .get_data("text/plain")
            {
              | Ok(raw) => {
                Uuid::parse_str(raw.trim())
                  .map_err(|error| {
                    tracing::warn!(
                      raw = %raw,
                      %error,
                      "failed to parse \
                       dragged task id"
                    );
                  })
                  .ok()
              }
              | Err(error) => {
                tracing::warn!(
                  ?error,
                  "failed reading drag data"
                );
                None
              }
            }
          });
        on_drop.emit((dragged, task_id));
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_: DragEvent| {
      on_drag_end.emit(());
    })
  };

  let on_toggle = {
    let on_toggle = props.on_toggle.clone();
    Callback::from(
      move |_: web_sys::Event| {
        on_toggle.emit(task_id)
      }
    )
  };

  let on_delete = {
    let on_delete = props.on_delete.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_delete.emit(task_id);
    })
  };

  let task = &props.task;
  html! {
      <li
          class={classes!(
              "row",
              task.done.then_some("done"),
              props.is_dragging.then_some("dragging"),
              props.is_drop_target.then_some("drop-hint")
          )}
          draggable="true"
          {ondragstart}
          {ondragover}
          {ondrop}
          {ondragend}
      >
          <input
              type="checkbox"
              class="row-check"
              checked={task.done}
              onchange={on_toggle}
          />
          <div class="row-body">
              <div class="row-title">{ &task.title }</div>
              <div class="row-meta">
                  <span class={task.priority.badge_class()}>
                      { task.priority.label() }
                  </span>
                  <span class="badge">{ task.period.label() }</span>
              </div>
          </div>
          <button class="btn danger" onclick={on_delete}>
              { "Delete" }
          </button>
      </li>
  }
}
