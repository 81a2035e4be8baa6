use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, Result};

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Done,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "TODO",
            TaskStatus::Done => "DONE",
        }
    }
}

/// A single tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned from the dataset counter
    pub id: u64,
    /// Free-form description
    pub text: String,
    /// Estimated duration in minutes
    pub est_minutes: u32,
    /// When the task was added
    pub created: DateTime<Utc>,
    /// When the task was marked done
    pub completed: Option<DateTime<Utc>>,
}

impl Task {
    pub fn status(&self) -> TaskStatus {
        if self.completed.is_some() {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created.date_naive()
    }

    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.completed.map(|c| c.date_naive())
    }
}

/// Result of marking a task done
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteOutcome {
    Completed(Task),
    AlreadyCompleted(Task),
}

/// The whole persisted state: every task plus the id counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub tasks: Vec<Task>,
    pub next_id: u64,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl Dataset {
    /// Append a new pending task and advance the id counter.
    /// Fails without mutating anything once the counter cannot advance.
    pub fn add_task(&mut self, text: String, est_minutes: u32, now: DateTime<Utc>) -> Result<&Task> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(DaybookError::IdsExhausted(id))?;

        let index = self.tasks.len();
        self.tasks.push(Task {
            id,
            text,
            est_minutes,
            created: now,
            completed: None,
        });
        Ok(&self.tasks[index])
    }

    /// Mark the task with `id` as done. A task that is already done is left untouched.
    pub fn complete(&mut self, id: u64, now: DateTime<Utc>) -> Result<CompleteOutcome> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(DaybookError::NotFound(id))?;

        if task.completed.is_some() {
            return Ok(CompleteOutcome::AlreadyCompleted(task.clone()));
        }

        task.completed = Some(now);
        Ok(CompleteOutcome::Completed(task.clone()))
    }

    /// Tasks created on `date`, in insertion order
    pub fn created_on(&self, date: NaiveDate) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.created_on() == date)
    }

    /// Check the id invariants, returning a description of the first violation
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let mut previous: Option<u64> = None;
        for task in &self.tasks {
            if let Some(prev) = previous {
                if task.id <= prev {
                    return Err(format!(
                        "task ids out of order: #{} follows #{}",
                        task.id, prev
                    ));
                }
            }
            previous = Some(task.id);
        }

        if let Some(last) = previous {
            if self.next_id <= last {
                return Err(format!(
                    "next_id {} does not exceed highest task id {}",
                    self.next_id, last
                ));
            }
        }

        Ok(())
    }
}
