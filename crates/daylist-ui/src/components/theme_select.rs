use daylist_core::theme::ThemePreference;
use web_sys::HtmlSelectElement;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::select_option;

#[derive(Properties, PartialEq)]
pub struct ThemeSelectProps {
  pub theme:     ThemePreference,
  pub on_change: Callback<ThemePreference>
}

#[function_component(ThemeSelect)]
pub fn theme_select(
  props: &ThemeSelectProps
) -> Html {
  let onchange = {
    let on_change = props.on_change.clone();
    Callback::from(
      move |event: web_sys::Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        match ThemePreference::from_key(
          &select.value()
        ) {
          | Some(theme) => on_change.emit(theme),
          | None => tracing::warn!(
            value = %select.value(),
            "unknown theme option"
          )
        }
      }
    )
  };

  let current = props.theme.as_key();
  html! {
      <select class="theme-select" {onchange}>
          {
              for ThemePreference::ALL.into_iter().map(|theme| {
                  select_option(theme.as_key(), theme.label(), current)
              })
          }
      </select>
  }
}
