use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CompletionId, HabitId};

/// A single check-off of a habit.
///
/// The event records whatever timestamp it was given; recency rules
/// (no future completions) are enforced by the recording service, not
/// here, so analytics stays total over any event set it is handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionEvent {
    id: CompletionId,
    habit_id: HabitId,
    checked_at: DateTime<Utc>,
    notes: String,
}

impl CompletionEvent {
    pub fn new(habit_id: HabitId, checked_at: DateTime<Utc>, notes: String) -> Self {
        Self {
            id: CompletionId::new(),
            habit_id,
            checked_at,
            notes,
        }
    }

    pub fn restore(
        id: CompletionId,
        habit_id: HabitId,
        checked_at: DateTime<Utc>,
        notes: String,
    ) -> Self {
        Self {
            id,
            habit_id,
            checked_at,
            notes,
        }
    }

    pub fn id(&self) -> &CompletionId {
        &self.id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }
}

impl std::fmt::Display for CompletionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Completion at {}", self.checked_at.format("%Y-%m-%d %H:%M"))
    }
}
