//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod status_bar;
mod theme_toggle;
mod todo_input;
mod todo_list;
mod todo_row;

pub use filter_bar::FilterBar;
pub use status_bar::StatusBar;
pub use theme_toggle::ThemeToggle;
pub use todo_input::TodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
