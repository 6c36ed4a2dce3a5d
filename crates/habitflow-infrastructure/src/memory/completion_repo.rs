use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use habitflow_domain::shared::{CompletionId, DomainError, HabitId};
use habitflow_domain::tracker::{CompletionEvent, CompletionRepository};

pub struct InMemoryCompletionRepository {
    events: RwLock<HashMap<String, CompletionEvent>>,
}

impl InMemoryCompletionRepository {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCompletionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionRepository for InMemoryCompletionRepository {
    async fn save(&self, event: &CompletionEvent) -> Result<(), DomainError> {
        let mut events = self.events.write().await;
        events.insert(event.id().as_str().to_string(), event.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &CompletionId,
    ) -> Result<Option<CompletionEvent>, DomainError> {
        let events = self.events.read().await;
        Ok(events.get(id.as_str()).cloned())
    }

    async fn list_by_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<CompletionEvent>, DomainError> {
        let events = self.events.read().await;
        let mut result: Vec<CompletionEvent> = events
            .values()
            .filter(|e| e.habit_id() == habit_id)
            .cloned()
            .collect();
        result.sort_by_key(|e| e.checked_at());
        Ok(result)
    }

    async fn update_notes(&self, id: &CompletionId, notes: &str) -> Result<(), DomainError> {
        let mut events = self.events.write().await;
        match events.get_mut(id.as_str()) {
            Some(event) => {
                event.set_notes(notes.to_string());
                Ok(())
            }
            None => Err(DomainError::CompletionNotFound(id.to_string())),
        }
    }

    async fn delete_by_habit(&self, habit_id: &HabitId) -> Result<(), DomainError> {
        let mut events = self.events.write().await;
        events.retain(|_, e| e.habit_id() != habit_id);
        Ok(())
    }

    async fn count_by_habit(&self, habit_id: &HabitId) -> Result<u32, DomainError> {
        let events = self.events.read().await;
        Ok(events.values().filter(|e| e.habit_id() == habit_id).count() as u32)
    }
}
