use async_trait::async_trait;

use super::{Cadence, Habit};
use crate::shared::{DomainError, HabitId};

#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Save (upsert) a habit.
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// Habit names are unique; this is the lookup the service layer
    /// addresses habits by.
    async fn find_by_name(&self, name: &str) -> Result<Option<Habit>, DomainError>;

    /// List habits in retrieval order: daily habits before weekly ones,
    /// then by creation time, then by name. Streak aggregation relies on
    /// this order being deterministic for its first-wins tie-break.
    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Habit>, DomainError>;

    /// List habits with a given cadence, in the same retrieval order.
    async fn find_by_cadence(
        &self,
        cadence: Cadence,
        include_inactive: bool,
    ) -> Result<Vec<Habit>, DomainError>;

    /// Hard delete. Completion cleanup is the caller's responsibility.
    async fn delete(&self, id: &HabitId) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u32, DomainError>;
}
