use chrono::{DateTime, Utc};
use log::info;

use crate::application::dtos::{CompletionDto, HabitHistoryDto, HabitStreakDto};
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::shared::DomainError;
use habitflow_domain::tracker::CompletionRepository;

use super::streak::build_streak_dto;

/// Get the completion summary for every habit.
///
/// Archived habits are included (the summary table marks their status);
/// rows come back in the repository's retrieval order, daily habits
/// before weekly ones.
pub async fn get_completion_summary(
    habit_repo: &dyn HabitRepository,
    completion_repo: &dyn CompletionRepository,
    now: DateTime<Utc>,
) -> Result<Vec<HabitStreakDto>, DomainError> {
    let habits = habit_repo.find_all(true).await?;
    let mut results = Vec::with_capacity(habits.len());

    for habit in habits {
        let events = completion_repo.list_by_habit(habit.id()).await?;
        results.push(build_streak_dto(&habit, &events, now));
    }

    info!("[streak] completion_summary habits={}", results.len());
    Ok(results)
}

/// Get a habit's full completion history, oldest first
pub async fn get_habit_history(
    habit_repo: &dyn HabitRepository,
    completion_repo: &dyn CompletionRepository,
    name: &str,
) -> Result<HabitHistoryDto, DomainError> {
    let habit = habit_repo
        .find_by_name(name)
        .await?
        .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;

    let events = completion_repo.list_by_habit(habit.id()).await?;

    let completions: Vec<CompletionDto> = events
        .iter()
        .map(|event| CompletionDto {
            completion_id: event.id().to_string(),
            checked_at: event.checked_at().to_rfc3339(),
            notes: event.notes().to_string(),
        })
        .collect();

    info!(
        "[streak] habit_history habit={} completions={}",
        habit.name(),
        completions.len()
    );

    Ok(HabitHistoryDto {
        habit_id: habit.id().to_string(),
        name: habit.name().to_string(),
        cadence: habit.cadence().to_string(),
        description: habit.description().to_string(),
        is_active: habit.is_active(),
        total_completions: completions.len() as u32,
        completions,
    })
}
