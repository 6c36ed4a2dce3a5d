// Application layer - queries and services over the domain ports

pub mod application;

pub use application::queries::HabitStreakQueries;
pub use application::services::{HabitService, TrackerService};
