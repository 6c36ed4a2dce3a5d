use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::application::dtos::{ChampionDto, HabitStreakDto};
use habitflow_domain::analytics;
use habitflow_domain::habit::{Habit, HabitRepository};
use habitflow_domain::shared::DomainError;
use habitflow_domain::tracker::{CompletionEvent, CompletionRepository};

use super::types::StreakComputation;

/// Get streak statistics for a single habit
pub async fn get_streak_stats(
    habit_repo: &dyn HabitRepository,
    completion_repo: &dyn CompletionRepository,
    name: &str,
    now: DateTime<Utc>,
) -> Result<HabitStreakDto, DomainError> {
    let habit = habit_repo
        .find_by_name(name)
        .await?
        .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;

    let events = completion_repo.list_by_habit(habit.id()).await?;
    let dto = build_streak_dto(&habit, &events, now);

    info!(
        "[streak] get_streak_stats habit={} current={} longest={} total={}",
        dto.name, dto.current_streak, dto.longest_streak, dto.total_completions
    );

    Ok(dto)
}

/// Get the active habit with the greatest longest-streak.
///
/// Habits are scanned in the repository's fixed retrieval order with a
/// strictly-greater comparison, so on a tie the first habit encountered
/// wins. Returns `None` when no active habits exist.
pub async fn get_champion(
    habit_repo: &dyn HabitRepository,
    completion_repo: &dyn CompletionRepository,
) -> Result<Option<ChampionDto>, DomainError> {
    let habits = habit_repo.find_all(false).await?;
    if habits.is_empty() {
        warn!("[streak] champion requested with no active habits");
        return Ok(None);
    }

    let mut champion: Option<ChampionDto> = None;

    for habit in habits {
        let events = completion_repo.list_by_habit(habit.id()).await?;
        let streak = longest_streak_of(&habit, &events);

        let beats = champion
            .as_ref()
            .map(|c| streak > c.longest_streak)
            .unwrap_or(true);
        if beats {
            champion = Some(ChampionDto {
                habit_id: habit.id().to_string(),
                name: habit.name().to_string(),
                cadence: habit.cadence().to_string(),
                longest_streak: streak,
            });
        }
    }

    if let Some(ref c) = champion {
        info!(
            "[streak] champion habit={} longest={}",
            c.name, c.longest_streak
        );
    }

    Ok(champion)
}

pub(super) fn build_streak_dto(
    habit: &Habit,
    events: &[CompletionEvent],
    now: DateTime<Utc>,
) -> HabitStreakDto {
    let streak = compute(habit, events, now);

    HabitStreakDto {
        habit_id: habit.id().to_string(),
        name: habit.name().to_string(),
        cadence: habit.cadence().to_string(),
        is_active: habit.is_active(),
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        total_completions: streak.total_completions,
        last_completion: streak.last_completion.map(|ts| ts.to_rfc3339()),
    }
}

fn compute(habit: &Habit, events: &[CompletionEvent], now: DateTime<Utc>) -> StreakComputation {
    if events.is_empty() {
        warn!("[streak] no completion history for habit={}", habit.name());
    }

    let timestamps: Vec<DateTime<Utc>> =
        events.iter().map(|event| event.checked_at()).collect();
    let dates = analytics::normalize(habit.cadence(), &timestamps);

    StreakComputation {
        current_streak: analytics::current_streak(habit.cadence(), &dates, now),
        longest_streak: analytics::longest_streak(habit.cadence(), &dates),
        total_completions: events.len() as u32,
        // list_by_habit is checked_at-ascending, so the tail is the latest
        last_completion: events.last().map(|event| event.checked_at()),
    }
}

fn longest_streak_of(habit: &Habit, events: &[CompletionEvent]) -> u32 {
    let timestamps: Vec<DateTime<Utc>> =
        events.iter().map(|event| event.checked_at()).collect();
    let dates = analytics::normalize(habit.cadence(), &timestamps);
    analytics::longest_streak(habit.cadence(), &dates)
}
