use async_trait::async_trait;

use super::CompletionEvent;
use crate::shared::{CompletionId, DomainError, HabitId};

#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Save (upsert) a completion event.
    async fn save(&self, event: &CompletionEvent) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        id: &CompletionId,
    ) -> Result<Option<CompletionEvent>, DomainError>;

    /// List every completion of a habit, `checked_at` ascending.
    async fn list_by_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<CompletionEvent>, DomainError>;

    async fn update_notes(&self, id: &CompletionId, notes: &str) -> Result<(), DomainError>;

    /// Remove a habit's entire history (hard habit deletion).
    async fn delete_by_habit(&self, habit_id: &HabitId) -> Result<(), DomainError>;

    async fn count_by_habit(&self, habit_id: &HabitId) -> Result<u32, DomainError>;
}
