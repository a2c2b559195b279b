use crate::history::{HistoryStore, HISTORY_FILE_NAME, MAX_HISTORY};
use crate::models::{GenerationHistory, GenerationRecord};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// History backed by a single JSON file (`{"results": [...]}`) under the
/// configured directory. Read-modify-write with no locking; last write
/// wins on this single-user surface.
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(HISTORY_FILE_NAME),
        }
    }

    fn load(&self) -> Vec<GenerationRecord> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<GenerationHistory>(&data) {
            Ok(history) => history.results,
            Err(e) => {
                log::warn!(
                    "Ignoring unparsable history file {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn persist(&self, results: Vec<GenerationRecord>) {
        let history = GenerationHistory { results };
        let data = match serde_json::to_string(&history) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Failed to encode history: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, data) {
            log::warn!(
                "Failed to write history file {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistory {
    async fn get_history(&self) -> Vec<GenerationRecord> {
        self.load()
    }

    async fn add_result(&self, record: GenerationRecord) {
        let mut results = self.load();
        results.insert(0, record);
        results.truncate(MAX_HISTORY);
        self.persist(results);
    }

    async fn delete_result(&self, id: &str) {
        let mut results = self.load();
        results.retain(|record| record.id != id);
        self.persist(results);
    }

    async fn clear_history(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to remove history file {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}
