use daylist_core::reorder::DragGesture;
use daylist_core::task::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:         Vec<Task>,
  pub empty_message: String,
  pub gesture:       DragGesture,
  pub on_toggle:     Callback<TaskId>,
  pub on_delete:     Callback<TaskId>,
  pub on_drag_start: Callback<TaskId>,
  pub on_drag_over:  Callback<TaskId>,
  pub on_drop:
    Callback<(Option<TaskId>, TaskId)>,
  pub on_drag_end:   Callback<()>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <p class="empty">{ props.empty_message.clone() }</p>
    };
  }

  let dragged = props.gesture.dragged();
  let over = props.gesture.over();

  html! {
      <ul class="task-list">
          {
              for props.tasks.iter().cloned().map(|task| {
                  let id = task.id;
                  html! {
                      <TaskListRow
                          key={id.to_string()}
                          task={task}
                          is_dragging={dragged == Some(id)}
                          is_drop_target={over == Some(id) && dragged != Some(id)}
                          on_toggle={props.on_toggle.clone()}
                          on_delete={props.on_delete.clone()}
                          on_drag_start={props.on_drag_start.clone()}
                          on_drag_over={props.on_drag_over.clone()}
                          on_drop={props.on_drop.clone()}
                          on_drag_end={props.on_drag_end.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
