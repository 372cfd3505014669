use daylist_core::filter::{
  ANY_KEY,
  FilterState,
  StatusFilter
};
use daylist_core::task::{
  Period,
  Priority
};
use web_sys::HtmlSelectElement;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::select_option;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub filter:    FilterState,
  pub on_change: Callback<FilterState>
}

/// Builds an `onchange` handler that rewrites one selector of the current
/// filter from the dropdown value.
fn selector_change(
  filter: FilterState,
  on_change: &Callback<FilterState>,
  apply: fn(&mut FilterState, &str)
) -> Callback<web_sys::Event> {
  let on_change = on_change.clone();
  Callback::from(
    move |event: web_sys::Event| {
      let select: HtmlSelectElement =
        event.target_unchecked_into();
      let mut next = filter;
      apply(&mut next, &select.value());
      on_change.emit(next);
    }
  )
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let filter = props.filter;

  let on_priority = selector_change(
    filter,
    &props.on_change,
    FilterState::set_priority_key
  );
  let on_period = selector_change(
    filter,
    &props.on_change,
    FilterState::set_period_key
  );
  let on_status = selector_change(
    filter,
    &props.on_change,
    FilterState::set_status_key
  );

  let on_clear = {
    let on_change = props.on_change.clone();
    Callback::from(move |_: MouseEvent| {
      on_change.emit(FilterState::default())
    })
  };

  let priority_key = filter.priority_key();
  let period_key = filter.period_key();
  let status_key = filter.status.as_key();

  html! {
      <div class="filters">
          <select onchange={on_priority}>
              { select_option(ANY_KEY, "All priorities", priority_key) }
              {
                  for Priority::ALL.into_iter().map(|priority| {
                      select_option(priority.as_key(), priority.label(), priority_key)
                  })
              }
          </select>
          <select onchange={on_period}>
              { select_option(ANY_KEY, "All periods", period_key) }
              {
                  for Period::ALL.into_iter().map(|period| {
                      select_option(period.as_key(), period.label(), period_key)
                  })
              }
          </select>
          <select onchange={on_status}>
              {
                  for StatusFilter::ALL.into_iter().map(|status| {
                      select_option(status.as_key(), status.label(), status_key)
                  })
              }
          </select>
          <button
              class="btn"
              disabled={!filter.is_active()}
              onclick={on_clear}
          >
              { "Clear" }
          </button>
      </div>
  }
}
