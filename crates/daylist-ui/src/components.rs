mod filter_bar;
mod task_form;
mod task_list;
mod task_list_row;
mod theme_select;

pub use filter_bar::FilterBar;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use theme_select::ThemeSelect;

use yew::{
  Html,
  html
};

/// `<option>` with the selection driven by state; `<select value=..>` alone
/// does not stick across re-renders.
pub(crate) fn select_option(
  value: &str,
  label: &str,
  current: &str
) -> Html {
  html! {
      <option value={value.to_string()} selected={value == current}>
          { label.to_string() }
      </option>
  }
}
