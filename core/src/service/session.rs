use tracing::debug;

use crate::service::task_store::{Action, TaskStore};

/// Side effects the presentation layer must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move keyboard focus to the list heading.
    FocusListHeading,
}

/// The single "ready" state of the application.
///
/// `previous_length` lags the task count by one settle: it is `None` until the
/// first settle and afterwards holds the count seen at the last one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: TaskStore,
    previous_length: Option<usize>,
}

impl Session {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            previous_length: None,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn previous_length(&self) -> Option<usize> {
        self.previous_length
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        debug!(?action, "dispatch");
        self.store = self.store.apply(action);
        self.settle()
    }

    /// Compares the current length against the lagged one and records it.
    pub fn settle(&mut self) -> Vec<Effect> {
        let length = self.store.len();
        let mut effects = Vec::new();

        if let Some(previous) = self.previous_length {
            if length < previous {
                debug!(previous, length, "task list shrank");
                effects.push(Effect::FocusListHeading);
            }
        }

        self.previous_length = Some(length);
        effects
    }
}
