use crate::models::GenerationRecord;
use async_trait::async_trait;

/// Capped, newest-first history of past generations.
///
/// Storage trouble is a defined degradation, not an error: backends log
/// and carry on, so every operation is infallible from the caller's side.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// The stored list, newest first; empty when absent or unparsable.
    async fn get_history(&self) -> Vec<GenerationRecord>;

    /// Prepends the record and truncates to the cap, overwriting the slot.
    async fn add_result(&self, record: GenerationRecord);

    /// Removes every entry with the given id, keeping the rest in order.
    async fn delete_result(&self, id: &str);

    /// Deletes the slot entirely.
    async fn clear_history(&self);
}
