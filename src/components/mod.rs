//! UI Components
//!
//! Leptos components for the single to-do page.

mod app_bar;
mod new_todo_form;
mod notice_bar;
mod todo_list;
mod todo_list_item;

pub use app_bar::AppBar;
pub use new_todo_form::NewTodoForm;
pub use notice_bar::NoticeBar;
pub use todo_list::TodoList;
pub use todo_list_item::TodoListItem;
