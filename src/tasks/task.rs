use chrono::NaiveDate;

use super::{category::Category, priority::Priority};
use crate::error::{Result, TodoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    details: String,
    category: Option<Category>,
    priority: Option<Priority>,
    due_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        details: impl Into<String>,
        category: Option<Category>,
        priority: Option<Priority>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
            category,
            priority,
            due_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.priority = priority;
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }
}

/// Values collected by the input row before a task is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub details: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl TaskForm {
    pub fn build(&self) -> Result<Task> {
        if self.name.is_empty() {
            return Err(TodoError::Validation(
                "Task name cannot be empty!".to_string(),
            ));
        }
        Ok(Task::new(
            self.name.clone(),
            self.details.clone(),
            self.category,
            self.priority,
            self.due_date,
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}
