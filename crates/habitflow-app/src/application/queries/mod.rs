mod streak_queries;

pub use streak_queries::HabitStreakQueries;
