// Infrastructure layer - collaborator implementations of the domain ports

pub mod memory;

pub use memory::{InMemoryCompletionRepository, InMemoryHabitRepository};
