use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::model::task::{Task, TaskId};
use crate::repository::traits::TaskSource;

const DEFAULT_DIR_NAME: &str = ".todomatic";
const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Deserialize)]
struct SeedRecord {
    id: Option<String>,
    name: String,
    #[serde(default)]
    completed: bool,
}

impl From<SeedRecord> for Task {
    fn from(record: SeedRecord) -> Self {
        Task {
            id: record.id.map(TaskId::from).unwrap_or_else(TaskId::generate),
            name: record.name,
            completed: record.completed,
        }
    }
}

/// JSON array of seed records. The file is only ever read.
#[derive(Clone, Debug)]
pub struct JsonSeedFile {
    file_path: PathBuf,
    required: bool,
}

impl JsonSeedFile {
    /// A seed file the user asked for explicitly; it must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
            required: true,
        }
    }

    /// `~/.todomatic/tasks.json`, silently empty when absent.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(Self {
            file_path: home_dir.join(DEFAULT_DIR_NAME).join(DEFAULT_FILE_NAME),
            required: false,
        })
    }
}

impl TaskSource for JsonSeedFile {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.required && !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no default seed file");
            return Ok(Vec::new());
        }

        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open seed file {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let records: Vec<SeedRecord> = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid seed file {}", self.file_path.display()))?;

        // Ids must stay unique; later duplicates are re-issued.
        let mut seen = HashSet::new();
        let tasks: Vec<Task> = records
            .into_iter()
            .map(Task::from)
            .map(|mut task| {
                if !seen.insert(task.id.clone()) {
                    let fresh = TaskId::generate();
                    warn!(duplicate = %task.id, id = %fresh, name = %task.name, "duplicate seed id replaced");
                    task.id = fresh;
                    seen.insert(task.id.clone());
                }
                task
            })
            .collect();
        info!(path = %self.file_path.display(), count = tasks.len(), "loaded seed tasks");
        Ok(tasks)
    }
}
