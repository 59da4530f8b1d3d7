//! Domain entities: individual todos and the ordered lists that hold them.

pub mod todo;
pub mod todo_list;

pub use todo::{is_valid_title, Todo, TodoId};
pub use todo_list::TodoList;
