use std::str::FromStr;
use std::sync::Arc;

use log::info;

use habitflow_domain::habit::{Cadence, Habit, HabitRepository};
use habitflow_domain::shared::DomainError;
use habitflow_domain::tracker::CompletionRepository;

/// Write-side operations on habit definitions.
pub struct HabitService {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
}

impl HabitService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
        }
    }

    /// Create a habit. The cadence arrives in its wire form and anything
    /// other than `daily`/`weekly` is rejected, never defaulted.
    pub async fn create_habit(
        &self,
        name: &str,
        cadence: &str,
        description: &str,
    ) -> Result<Habit, DomainError> {
        let cadence = Cadence::from_str(cadence)?;

        if self.habit_repo.find_by_name(name.trim()).await?.is_some() {
            return Err(DomainError::DuplicateHabit(name.trim().to_string()));
        }

        let habit = Habit::new(name.to_string(), cadence, description.to_string())?;
        self.habit_repo.save(&habit).await?;

        info!("[habit] created name={} cadence={}", habit.name(), cadence);
        Ok(habit)
    }

    /// Update name, cadence and/or description of an existing habit.
    /// Completions stay attached across renames because events link by
    /// habit id, not name.
    pub async fn update_habit(
        &self,
        name: &str,
        new_name: Option<&str>,
        new_cadence: Option<&str>,
        new_description: Option<&str>,
    ) -> Result<Habit, DomainError> {
        let mut habit = self.require_habit(name).await?;

        if let Some(new_name) = new_name {
            if new_name.trim() != habit.name() {
                if self
                    .habit_repo
                    .find_by_name(new_name.trim())
                    .await?
                    .is_some()
                {
                    return Err(DomainError::DuplicateHabit(new_name.trim().to_string()));
                }
                habit.rename(new_name.to_string())?;
            }
        }

        if let Some(new_cadence) = new_cadence {
            habit.change_cadence(Cadence::from_str(new_cadence)?);
        }

        if let Some(new_description) = new_description {
            habit.set_description(new_description.to_string());
        }

        self.habit_repo.save(&habit).await?;

        info!("[habit] updated name={}", habit.name());
        Ok(habit)
    }

    /// Soft delete: the habit is marked inactive, history stays.
    pub async fn archive_habit(&self, name: &str) -> Result<(), DomainError> {
        let mut habit = self.require_habit(name).await?;
        habit.archive();
        self.habit_repo.save(&habit).await?;

        info!("[habit] archived name={}", habit.name());
        Ok(())
    }

    pub async fn reactivate_habit(&self, name: &str) -> Result<(), DomainError> {
        let mut habit = self.require_habit(name).await?;
        habit.reactivate();
        self.habit_repo.save(&habit).await?;

        info!("[habit] reactivated name={}", habit.name());
        Ok(())
    }

    /// Hard delete: removes the habit and its entire completion history.
    pub async fn delete_habit(&self, name: &str) -> Result<(), DomainError> {
        let habit = self.require_habit(name).await?;

        self.completion_repo.delete_by_habit(habit.id()).await?;
        self.habit_repo.delete(habit.id()).await?;

        info!("[habit] deleted name={}", habit.name());
        Ok(())
    }

    pub async fn get_habit_by_name(&self, name: &str) -> Result<Option<Habit>, DomainError> {
        self.habit_repo.find_by_name(name).await
    }

    pub async fn list_habits(&self, include_inactive: bool) -> Result<Vec<Habit>, DomainError> {
        self.habit_repo.find_all(include_inactive).await
    }

    pub async fn list_by_cadence(
        &self,
        cadence: &str,
        include_inactive: bool,
    ) -> Result<Vec<Habit>, DomainError> {
        let cadence = Cadence::from_str(cadence)?;
        self.habit_repo.find_by_cadence(cadence, include_inactive).await
    }

    pub async fn has_habits(&self) -> Result<bool, DomainError> {
        Ok(self.habit_repo.count().await? > 0)
    }

    async fn require_habit(&self, name: &str) -> Result<Habit, DomainError> {
        self.habit_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))
    }
}
