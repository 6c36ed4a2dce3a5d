use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cadence;
use crate::shared::{DomainError, HabitId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    name: String,
    cadence: Cadence,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(name: String, cadence: Cadence, description: String) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: HabitId::new(),
            name: name.trim().to_string(),
            cadence,
            description: description.trim().to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(
        id: HabitId,
        name: String,
        cadence: Cadence,
        description: String,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            cadence,
            description,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }
        self.name = name.trim().to_string();
        self.touch();
        Ok(())
    }

    /// Changing cadence re-interprets the existing history under the new
    /// period length; past completions are kept as-is.
    pub fn change_cadence(&mut self, cadence: Cadence) {
        self.cadence = cadence;
        self.touch();
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description.trim().to_string();
        self.touch();
    }

    /// Soft delete: the habit stops accepting completions but its
    /// history stays queryable.
    pub fn archive(&mut self) {
        self.is_active = false;
        self.touch();
    }

    pub fn reactivate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Display for Habit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_active { "Active" } else { "Inactive" };
        write!(f, "{} ({}) - {}", self.name, self.cadence, status)
    }
}
