use tracing::debug;

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};

/// A mutation intent raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask(String),
    ToggleTaskCompleted(TaskId),
    DeleteTask(TaskId),
    EditTask(TaskId, String),
    SetFilter(Filter),
}

/// Ordered task sequence plus the active filter.
///
/// Every operation takes `&self` and returns the next state; the receiver is
/// never modified. Operations addressing an unknown id return an unchanged copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: Filter::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    pub fn apply(&self, action: Action) -> TaskStore {
        match action {
            Action::AddTask(name) => self.add_task(name),
            Action::ToggleTaskCompleted(id) => self.toggle_task_completed(&id),
            Action::DeleteTask(id) => self.delete_task(&id),
            Action::EditTask(id, name) => self.edit_task(&id, name),
            Action::SetFilter(filter) => self.set_filter(filter),
        }
    }

    /// Appends a new pending task. Callers check the name is non-empty first.
    pub fn add_task(&self, name: impl Into<String>) -> TaskStore {
        let task = Task::new(name);
        debug!(id = %task.id, name = %task.name, "task added");

        let mut tasks = self.tasks.clone();
        tasks.push(task);
        TaskStore {
            tasks,
            filter: self.filter,
        }
    }

    pub fn toggle_task_completed(&self, id: &TaskId) -> TaskStore {
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == *id {
                    debug!(id = %id, completed = !task.completed, "task toggled");
                    Task {
                        completed: !task.completed,
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
        TaskStore {
            tasks,
            filter: self.filter,
        }
    }

    pub fn delete_task(&self, id: &TaskId) -> TaskStore {
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.id != *id)
            .cloned()
            .collect();
        debug!(id = %id, remaining = tasks.len(), "task deleted");
        TaskStore {
            tasks,
            filter: self.filter,
        }
    }

    /// Renames the matching task. The new name is taken as-is.
    pub fn edit_task(&self, id: &TaskId, new_name: impl Into<String>) -> TaskStore {
        let new_name = new_name.into();
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == *id {
                    debug!(id = %id, name = %new_name, "task renamed");
                    Task {
                        name: new_name.clone(),
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
        TaskStore {
            tasks,
            filter: self.filter,
        }
    }

    pub fn set_filter(&self, filter: Filter) -> TaskStore {
        debug!(filter = %filter, "filter changed");
        TaskStore {
            tasks: self.tasks.clone(),
            filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.name.as_str()).collect()
    }

    fn id_of(store: &TaskStore, name: &str) -> TaskId {
        store
            .tasks()
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.id.clone())
            .unwrap()
    }

    #[test]
    fn test_add_preserves_issue_order() {
        let store = TaskStore::new()
            .add_task("Buy milk")
            .add_task("Walk dog")
            .add_task("Call mum");

        assert_eq!(store.len(), 3);
        assert_eq!(names(&store), vec!["Buy milk", "Walk dog", "Call mum"]);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_operations_leave_receiver_untouched() {
        let store = TaskStore::new().add_task("Buy milk");
        let id = id_of(&store, "Buy milk");
        let before = store.clone();

        let _ = store.add_task("Walk dog");
        let _ = store.toggle_task_completed(&id);
        let _ = store.edit_task(&id, "Buy oat milk");
        let _ = store.delete_task(&id);
        let _ = store.set_filter(Filter::Completed);

        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let store = TaskStore::new().add_task("Buy milk").add_task("Walk dog");
        let id = id_of(&store, "Buy milk");

        let once = store.toggle_task_completed(&id);
        assert!(once.get(&id).unwrap().completed);
        assert_eq!(once.tasks()[1], store.tasks()[1]);

        let twice = once.toggle_task_completed(&id);
        assert_eq!(twice, store);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let store = TaskStore::new().add_task("Buy milk");
        let next = store.toggle_task_completed(&TaskId::from("todo-missing"));
        assert_eq!(next, store);
    }

    #[test]
    fn test_delete_is_idempotent_and_keeps_order() {
        let store = TaskStore::new()
            .add_task("a")
            .add_task("b")
            .add_task("c");
        let id = id_of(&store, "b");

        let once = store.delete_task(&id);
        assert_eq!(names(&once), vec!["a", "c"]);
        assert!(once.get(&id).is_none());

        let twice = once.delete_task(&id);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_edit_changes_only_name() {
        let store = TaskStore::new().add_task("Buy milk").add_task("Walk dog");
        let id = id_of(&store, "Buy milk");
        let store = store.toggle_task_completed(&id);

        let edited = store.edit_task(&id, "Buy oat milk");
        let task = edited.get(&id).unwrap();
        assert_eq!(task.name, "Buy oat milk");
        assert!(task.completed);
        assert_eq!(edited.tasks()[1], store.tasks()[1]);
        for filter in Filter::ALL {
            assert_eq!(
                filter.matches(store.get(&id).unwrap()),
                filter.matches(task)
            );
        }
    }

    #[test]
    fn test_edit_accepts_empty_name() {
        let store = TaskStore::new().add_task("Buy milk");
        let id = id_of(&store, "Buy milk");
        assert_eq!(store.edit_task(&id, "").get(&id).unwrap().name, "");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let store = TaskStore::new().add_task("Buy milk");
        assert_eq!(store.edit_task(&TaskId::from("nope"), "x"), store);
    }

    #[test]
    fn test_set_filter_keeps_tasks() {
        let store = TaskStore::new().add_task("Buy milk");
        let filtered = store.set_filter(Filter::Active);
        assert_eq!(filtered.filter(), Filter::Active);
        assert_eq!(filtered.tasks(), store.tasks());
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let store = TaskStore::new().apply(Action::AddTask("Buy milk".to_string()));
        let id = id_of(&store, "Buy milk");

        let store = store.apply(Action::ToggleTaskCompleted(id.clone()));
        assert!(store.get(&id).unwrap().completed);

        let store = store.apply(Action::EditTask(id.clone(), "Buy bread".to_string()));
        assert_eq!(store.get(&id).unwrap().name, "Buy bread");

        let store = store.apply(Action::SetFilter(Filter::Completed));
        assert_eq!(store.filter(), Filter::Completed);

        let store = store.apply(Action::DeleteTask(id));
        assert!(store.is_empty());
    }
}
