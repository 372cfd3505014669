use daylist_core::task::{
  Period,
  Priority
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

use super::select_option;

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub default_priority: Priority,
  pub default_period:   Period,
  pub on_add:
    Callback<(String, Priority, Period)>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let title = use_state(String::new);
  let priority =
    use_state(|| props.default_priority);
  let period =
    use_state(|| props.default_period);

  let submit = {
    let title = title.clone();
    let priority = priority.clone();
    let period = period.clone();
    let on_add = props.on_add.clone();
    let default_priority =
      props.default_priority;
    let default_period = props.default_period;
    Callback::from(move |()| {
      if title.trim().is_empty() {
        return;
      }
      on_add.emit((
        (*title).clone(),
        *priority,
        *period
      ));
      title.set(String::new());
      priority.set(default_priority);
      period.set(default_period);
    })
  };

  let on_title_input = {
    let title = title.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        title.set(input.value());
      }
    )
  };

  let on_title_keydown = {
    let submit = submit.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() == "Enter" {
          event.prevent_default();
          submit.emit(());
        }
      }
    )
  };

  let on_priority_change = {
    let priority = priority.clone();
    Callback::from(
      move |event: web_sys::Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        if let Some(value) =
          Priority::from_key(&select.value())
        {
          priority.set(value);
        }
      }
    )
  };

  let on_period_change = {
    let period = period.clone();
    Callback::from(
      move |event: web_sys::Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        if let Some(value) =
          Period::from_key(&select.value())
        {
          period.set(value);
        }
      }
    )
  };

  let on_add_click =
    Callback::from(move |_: MouseEvent| {
      submit.emit(());
    });

  let priority_key = priority.as_key();
  let period_key = period.as_key();

  html! {
      <div class="task-form">
          <input
              class="title-input"
              placeholder="New task..."
              value={(*title).clone()}
              oninput={on_title_input}
              onkeydown={on_title_keydown}
          />
          <div class="task-form-row">
              <select onchange={on_priority_change}>
                  {
                      for Priority::ALL.into_iter().map(|value| {
                          select_option(value.as_key(), value.label(), priority_key)
                      })
                  }
              </select>
              <select onchange={on_period_change}>
                  {
                      for Period::ALL.into_iter().map(|value| {
                          select_option(value.as_key(), value.label(), period_key)
                      })
                  }
              </select>
              <button class="btn primary" onclick={on_add_click}>
                  { "Add" }
              </button>
          </div>
      </div>
  }
}
