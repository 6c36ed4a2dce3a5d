mod aggregate;
mod cadence;
mod repository;


pub use aggregate::Habit;
pub use cadence::Cadence;
pub use repository::HabitRepository;
