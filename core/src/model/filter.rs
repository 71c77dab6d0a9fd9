use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::task::Task;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown filter: '{0}' (expected All, Active or Completed)")]
pub struct ParseFilterError(pub String);

impl Filter {
    /// Every filter, in the order the controls are rendered.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn name(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn predicate(self) -> fn(&Task) -> bool {
        match self {
            Filter::All => |_: &Task| true,
            Filter::Active => |task: &Task| !task.completed,
            Filter::Completed => |task: &Task| task.completed,
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        (self.predicate())(task)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}
