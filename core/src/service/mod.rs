pub mod session;
pub mod task_store;
pub mod view;
