pub mod file;
pub mod memory;
pub mod traits;

use crate::config::Config;
use crate::models::GenerationRecord;
use std::sync::Arc;

use file::JsonFileHistory;
use memory::InMemoryHistory;

pub use traits::HistoryStore;

/// Hard cap on retained generation records; oldest entries are evicted.
pub const MAX_HISTORY: usize = 20;

/// Fixed name of the JSON slot holding the history.
pub const HISTORY_FILE_NAME: &str = "ai_image_history.json";

/// Selects and wraps the history backend: file-backed when a history
/// directory is configured, in-memory otherwise.
#[derive(Clone)]
pub struct HistoryManager {
    backend: Arc<dyn HistoryStore>,
}

impl HistoryManager {
    pub fn new(config: &Config) -> Self {
        let backend: Arc<dyn HistoryStore> = match &config.history_dir {
            Some(dir) => {
                log::info!("History stored under {}", dir);
                Arc::new(JsonFileHistory::new(dir))
            }
            None => {
                log::info!("No history directory configured, keeping history in memory");
                Arc::new(InMemoryHistory::new())
            }
        };

        Self { backend }
    }

    pub fn with_backend(backend: Arc<dyn HistoryStore>) -> Self {
        Self { backend }
    }

    pub async fn get_history(&self) -> Vec<GenerationRecord> {
        self.backend.get_history().await
    }

    pub async fn add_result(&self, record: GenerationRecord) {
        self.backend.add_result(record).await
    }

    pub async fn delete_result(&self, id: &str) {
        self.backend.delete_result(id).await
    }

    pub async fn clear_history(&self) {
        self.backend.clear_history().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manager_uses_file_backend_when_dir_configured() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new().with_history_dir(dir.path().to_string_lossy());
        let manager = HistoryManager::new(&config);

        let record = GenerationRecord::new(
            "1754640000000",
            "a quiet library",
            "https://cdn.example.com/img.png",
            crate::models::ImageSize::Square,
            crate::models::GenerationMode::Normal,
            1754640000000,
        );
        manager.add_result(record).await;

        assert!(dir.path().join(HISTORY_FILE_NAME).exists());
        assert_eq!(manager.get_history().await.len(), 1);
    }

    #[tokio::test]
    async fn manager_falls_back_to_memory() {
        let manager = HistoryManager::new(&Config::new());
        assert!(manager.get_history().await.is_empty());
    }

    #[tokio::test]
    async fn manager_accepts_an_injected_backend() {
        let backend = Arc::new(InMemoryHistory::new());
        let manager = HistoryManager::with_backend(backend.clone());

        let record = GenerationRecord::new(
            "1754640000001",
            "injected",
            "https://cdn.example.com/injected.png",
            crate::models::ImageSize::Portrait,
            crate::models::GenerationMode::Normal,
            1754640000001,
        );
        manager.add_result(record).await;

        assert_eq!(backend.get_history().await.len(), 1);
    }
}
