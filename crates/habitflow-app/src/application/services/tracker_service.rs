use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;

use habitflow_domain::habit::HabitRepository;
use habitflow_domain::shared::{CompletionId, DomainError};
use habitflow_domain::tracker::{CompletionEvent, CompletionRepository};

/// Records completions. This is where recency is enforced: the
/// analytics engine stays total over whatever event set exists, so a
/// completion dated in the future must be rejected here, at the door.
pub struct TrackerService {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
}

impl TrackerService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
        }
    }

    /// Record a completion at a given time. The habit must exist, be
    /// active, and `checked_at` must not lie in the future.
    pub async fn check_off(
        &self,
        name: &str,
        checked_at: DateTime<Utc>,
        notes: &str,
    ) -> Result<CompletionEvent, DomainError> {
        let habit = self
            .habit_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;

        if !habit.is_active() {
            return Err(DomainError::HabitInactive(name.to_string()));
        }

        if checked_at > Utc::now() {
            return Err(DomainError::CompletionInFuture(
                checked_at.to_rfc3339(),
            ));
        }

        let event = CompletionEvent::new(habit.id().clone(), checked_at, notes.to_string());
        self.completion_repo.save(&event).await?;

        info!(
            "[tracker] check_off habit={} at={}",
            habit.name(),
            checked_at.to_rfc3339()
        );
        Ok(event)
    }

    /// Record a completion happening right now.
    pub async fn check_off_now(
        &self,
        name: &str,
        notes: &str,
    ) -> Result<CompletionEvent, DomainError> {
        self.check_off(name, Utc::now(), notes).await
    }

    /// A habit's completions, oldest first.
    pub async fn get_history(&self, name: &str) -> Result<Vec<CompletionEvent>, DomainError> {
        let habit = self
            .habit_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;

        self.completion_repo.list_by_habit(habit.id()).await
    }

    pub async fn update_notes(
        &self,
        completion_id: &CompletionId,
        notes: &str,
    ) -> Result<(), DomainError> {
        self.completion_repo.update_notes(completion_id, notes).await
    }
}
