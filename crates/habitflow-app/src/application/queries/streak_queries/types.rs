use chrono::{DateTime, Utc};

pub struct StreakComputation {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u32,
    pub last_completion: Option<DateTime<Utc>>,
}
