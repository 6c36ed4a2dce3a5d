//! In-memory repositories.
//!
//! The analytics engine works on data handed to it by a collaborator
//! store; these `RwLock<HashMap>` implementations are that
//! collaborator. They uphold the ordering contracts the domain ports
//! document (cadence-grouped habit listing, `checked_at`-ascending
//! completion history).

mod completion_repo;
mod habit_repo;

pub use completion_repo::InMemoryCompletionRepository;
pub use habit_repo::InMemoryHabitRepository;
