use crate::model::filter::Filter;
use crate::model::task::Task;
use crate::service::task_store::TaskStore;

pub const EMPTY_MESSAGE: &str = "Empty - no task";

/// Tasks matching `filter`, in their original order.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Heading text for the list.
///
/// The noun always follows the visible count, including for `All` where the
/// count itself is not printed.
pub fn summary_text(tasks: &[Task], filter: Filter) -> String {
    if tasks.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let count = visible_tasks(tasks, filter).len();
    let noun = if count == 1 { "task" } else { "tasks" };

    match filter {
        Filter::All => format!("{} {}", filter.name(), noun),
        Filter::Active => format!("{} {} remaining", count, noun),
        Filter::Completed => format!("{} {} completed", count, noun),
    }
}

impl TaskStore {
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.tasks(), self.filter())
    }

    pub fn summary(&self) -> String {
        summary_text(self.tasks(), self.filter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    fn sample() -> Vec<Task> {
        let mut tasks = vec![Task::new("a"), Task::new("b"), Task::new("c"), Task::new("d")];
        tasks[1].completed = true;
        tasks[3].completed = true;
        tasks
    }

    #[test]
    fn test_visible_is_ordered_projection() {
        let tasks = sample();
        assert_eq!(names(&visible_tasks(&tasks, Filter::All)), vec!["a", "b", "c", "d"]);
        assert_eq!(names(&visible_tasks(&tasks, Filter::Active)), vec!["a", "c"]);
        assert_eq!(names(&visible_tasks(&tasks, Filter::Completed)), vec!["b", "d"]);
    }

    #[test]
    fn test_empty_message_overrides_every_filter() {
        for filter in Filter::ALL {
            assert_eq!(summary_text(&[], filter), "Empty - no task");
        }
    }

    #[test]
    fn test_summary_counts_visible_tasks() {
        let tasks = sample();
        assert_eq!(summary_text(&tasks, Filter::All), "All tasks");
        assert_eq!(summary_text(&tasks, Filter::Active), "2 tasks remaining");
        assert_eq!(summary_text(&tasks, Filter::Completed), "2 tasks completed");
    }

    #[test]
    fn test_noun_uses_filtered_count() {
        let tasks = vec![Task::new("only")];
        assert_eq!(summary_text(&tasks, Filter::All), "All task");
        assert_eq!(summary_text(&tasks, Filter::Active), "1 task remaining");
        assert_eq!(summary_text(&tasks, Filter::Completed), "0 tasks completed");
    }

    #[test]
    fn test_walkthrough() {
        let store = TaskStore::with_tasks(vec![Task::new("Buy milk")]).add_task("Walk dog");
        assert_eq!(names(&store.visible()), vec!["Buy milk", "Walk dog"]);

        let milk = store.tasks()[0].id.clone();
        let store = store.toggle_task_completed(&milk);
        assert!(store.tasks()[0].completed);
        assert!(!store.tasks()[1].completed);

        let store = store.set_filter(Filter::Active);
        assert_eq!(names(&store.visible()), vec!["Walk dog"]);
        assert_eq!(store.summary(), "1 task remaining");

        let store = store.set_filter(Filter::Completed);
        assert_eq!(names(&store.visible()), vec!["Buy milk"]);
        assert_eq!(store.summary(), "1 task completed");
    }
}
