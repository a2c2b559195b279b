use crate::history::{HistoryStore, MAX_HISTORY};
use crate::models::GenerationRecord;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory history. The fallback when no history directory is
/// configured, and the fake the rest of the crate tests against.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: Mutex<Vec<GenerationRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn get_history(&self) -> Vec<GenerationRecord> {
        self.records.lock().unwrap().clone()
    }

    async fn add_result(&self, record: GenerationRecord) {
        let mut records = self.records.lock().unwrap();
        records.insert(0, record);
        records.truncate(MAX_HISTORY);
    }

    async fn delete_result(&self, id: &str) {
        let mut records = self.records.lock().unwrap();
        records.retain(|record| record.id != id);
    }

    async fn clear_history(&self) {
        self.records.lock().unwrap().clear();
    }
}
