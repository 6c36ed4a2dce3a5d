use std::sync::Arc;

use chrono::Utc;

use crate::application::dtos::{ChampionDto, HabitHistoryDto, HabitStreakDto};
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::shared::DomainError;
use habitflow_domain::tracker::CompletionRepository;

mod streak;
mod summary;
mod types;


/// Read-side facade for streak statistics: one habit, the whole
/// completion-summary table, and champion selection.
pub struct HabitStreakQueries {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
}

impl HabitStreakQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
        }
    }

    /// Get streak statistics for a single habit
    pub async fn get_streak_stats(&self, name: &str) -> Result<HabitStreakDto, DomainError> {
        streak::get_streak_stats(
            self.habit_repo.as_ref(),
            self.completion_repo.as_ref(),
            name,
            Utc::now(),
        )
        .await
    }

    /// Get the completion summary for every habit, archived ones included
    pub async fn get_completion_summary(&self) -> Result<Vec<HabitStreakDto>, DomainError> {
        summary::get_completion_summary(
            self.habit_repo.as_ref(),
            self.completion_repo.as_ref(),
            Utc::now(),
        )
        .await
    }

    /// Get the active habit with the greatest longest-streak
    pub async fn get_champion(&self) -> Result<Option<ChampionDto>, DomainError> {
        streak::get_champion(self.habit_repo.as_ref(), self.completion_repo.as_ref()).await
    }

    /// Get a habit's full completion history
    pub async fn get_habit_history(&self, name: &str) -> Result<HabitHistoryDto, DomainError> {
        summary::get_habit_history(self.habit_repo.as_ref(), self.completion_repo.as_ref(), name)
            .await
    }
}
