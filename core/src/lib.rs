pub mod model;
pub mod repository;
pub mod input;
pub mod service;

pub use model::task::{Task, TaskId};
pub use model::filter::{Filter, ParseFilterError};
pub use repository::{TaskSource, JsonSeedFile, EmptySource};
pub use input::{validate_new_name, ValidationError};
pub use service::task_store::{Action, TaskStore};
pub use service::session::{Effect, Session};
pub use service::view::{visible_tasks, summary_text, EMPTY_MESSAGE};
