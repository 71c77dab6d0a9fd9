use crate::model::task::Task;
use anyhow::Result;

/// Read-only origin of the initial task sequence.
pub trait TaskSource {
    fn load(&self) -> Result<Vec<Task>>;
}

/// A source with no tasks.
pub struct EmptySource;

impl TaskSource for EmptySource {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(Vec::new())
    }
}
