use serde::{Deserialize, Serialize};

/// One row of the completion-summary table; also the per-habit streak
/// answer. Timestamps are RFC 3339 strings, cadence is its lowercase
/// wire form — render-ready, nothing localized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitStreakDto {
    pub habit_id: String,
    pub name: String,
    pub cadence: String,
    pub is_active: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u32,
    pub last_completion: Option<String>,
}

/// The habit with the greatest longest-streak across a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionDto {
    pub habit_id: String,
    pub name: String,
    pub cadence: String,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionDto {
    pub completion_id: String,
    pub checked_at: String,
    pub notes: String,
}

/// Full completion history of one habit, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitHistoryDto {
    pub habit_id: String,
    pub name: String,
    pub cadence: String,
    pub description: String,
    pub is_active: bool,
    pub total_completions: u32,
    pub completions: Vec<CompletionDto>,
}
