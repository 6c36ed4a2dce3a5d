use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use habitflow_domain::habit::{Cadence, Habit, HabitRepository};
use habitflow_domain::shared::{DomainError, HabitId};

pub struct InMemoryHabitRepository {
    habits: RwLock<HashMap<String, Habit>>,
}

impl InMemoryHabitRepository {
    pub fn new() -> Self {
        Self {
            habits: RwLock::new(HashMap::new()),
        }
    }

    /// Retrieval order: daily before weekly, then creation time, then
    /// name. Champion selection's first-wins tie-break depends on this
    /// being stable across calls.
    fn sort_for_retrieval(habits: &mut [Habit]) {
        habits.sort_by(|a, b| {
            a.cadence()
                .cmp(&b.cadence())
                .then(a.created_at().cmp(&b.created_at()))
                .then_with(|| a.name().cmp(b.name()))
        });
    }
}

impl Default for InMemoryHabitRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HabitRepository for InMemoryHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.insert(habit.id().as_str().to_string(), habit.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.get(id.as_str()).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.values().find(|h| h.name() == name).cloned())
    }

    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        let mut result: Vec<Habit> = habits
            .values()
            .filter(|h| include_inactive || h.is_active())
            .cloned()
            .collect();
        Self::sort_for_retrieval(&mut result);
        Ok(result)
    }

    async fn find_by_cadence(
        &self,
        cadence: Cadence,
        include_inactive: bool,
    ) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        let mut result: Vec<Habit> = habits
            .values()
            .filter(|h| h.cadence() == cadence)
            .filter(|h| include_inactive || h.is_active())
            .cloned()
            .collect();
        Self::sort_for_retrieval(&mut result);
        Ok(result)
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.remove(id.as_str());
        Ok(())
    }

    async fn count(&self) -> Result<u32, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn saved(repo: &InMemoryHabitRepository, name: &str, cadence: Cadence) -> Habit {
        let habit = Habit::new(name.to_string(), cadence, String::new()).unwrap();
        repo.save(&habit).await.unwrap();
        habit
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryHabitRepository::new();
        let habit = saved(&repo, "Read Journal", Cadence::Daily).await;

        let found = repo.find_by_id(habit.id()).await.unwrap();
        assert_eq!(found.unwrap().name(), "Read Journal");
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = InMemoryHabitRepository::new();
        saved(&repo, "Water Plants", Cadence::Weekly).await;

        let found = repo.find_by_name("Water Plants").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_name("Unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_groups_daily_before_weekly() {
        let repo = InMemoryHabitRepository::new();
        saved(&repo, "Water Plants", Cadence::Weekly).await;
        saved(&repo, "Read Journal", Cadence::Daily).await;
        saved(&repo, "Finance Check", Cadence::Weekly).await;
        saved(&repo, "Skin Care", Cadence::Daily).await;

        let all = repo.find_all(true).await.unwrap();
        let cadences: Vec<Cadence> = all.iter().map(|h| h.cadence()).collect();
        assert_eq!(
            cadences,
            vec![
                Cadence::Daily,
                Cadence::Daily,
                Cadence::Weekly,
                Cadence::Weekly
            ]
        );
    }

    #[tokio::test]
    async fn test_find_all_excludes_inactive_by_default() {
        let repo = InMemoryHabitRepository::new();
        let mut habit = saved(&repo, "Skin Care", Cadence::Daily).await;
        saved(&repo, "Read Journal", Cadence::Daily).await;

        habit.archive();
        repo.save(&habit).await.unwrap();

        assert_eq!(repo.find_all(false).await.unwrap().len(), 1);
        assert_eq!(repo.find_all(true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_cadence() {
        let repo = InMemoryHabitRepository::new();
        saved(&repo, "Read Journal", Cadence::Daily).await;
        saved(&repo, "Water Plants", Cadence::Weekly).await;

        let weekly = repo.find_by_cadence(Cadence::Weekly, false).await.unwrap();
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].name(), "Water Plants");
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let repo = InMemoryHabitRepository::new();
        let mut habit = saved(&repo, "Play Music", Cadence::Daily).await;

        habit.rename("Practice Guitar".to_string()).unwrap();
        repo.save(&habit).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.find_by_id(habit.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Practice Guitar");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryHabitRepository::new();
        let habit = saved(&repo, "Play Music", Cadence::Daily).await;

        repo.delete(habit.id()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
