mod habit_service;
mod tracker_service;

pub use habit_service::HabitService;
pub use tracker_service::TrackerService;
