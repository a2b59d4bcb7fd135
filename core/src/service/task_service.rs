use std::collections::HashMap;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{StoreError, TaskError};
use crate::model::task::{Priority, Task};
use crate::repository::TaskRepository;
use crate::service::dto::Stats;

/// Owns the in-memory task list and writes it through to the
/// repository after every mutation. The list keeps insertion order and
/// is never sorted.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Builds the service with the list read from the store.
    pub fn load(repo: R) -> Result<Self, StoreError> {
        let tasks = repo.load()?;
        Ok(Self { repo, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new pending task and persists. Empty text is rejected
    /// before anything changes.
    pub fn add(
        &mut self,
        text: String,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Result<(), TaskError> {
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        self.tasks.push(Task::new(text, due_date, priority));
        self.repo.save(&self.tasks)?;
        Ok(())
    }

    /// Sets the done flag of the task at `index`. Only an actual
    /// change is written back; setting the flag to its current value
    /// is a no-op.
    pub fn toggle_done(&mut self, index: usize, value: bool) -> Result<(), TaskError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })?;
        if task.done == value {
            return Ok(());
        }
        task.done = value;
        self.repo.save(&self.tasks)?;
        Ok(())
    }

    /// Removes every completed task. Returns how many were removed;
    /// the file is rewritten only when something was.
    pub fn clear_completed(&mut self) -> Result<usize, TaskError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.repo.save(&self.tasks)?;
        }
        Ok(removed)
    }

    /// Case-insensitive substring match on the task text. An empty
    /// query matches everything.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Task> {
        let needle = query.to_lowercase();
        self.tasks
            .iter()
            .filter(move |t| t.text.to_lowercase().contains(&needle))
    }

    pub fn due_or_overdue(&self, today: NaiveDate) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.is_due_or_overdue(today))
    }

    pub fn due_soon(&self, today: NaiveDate) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.is_due_soon(today))
    }

    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.done).count();
        let percent = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };
        Stats {
            completed,
            total,
            percent,
        }
    }

    pub fn priority_counts(&self) -> HashMap<Priority, usize> {
        let mut counts = HashMap::new();
        for task in &self.tasks {
            *counts.entry(task.priority).or_insert(0) += 1;
        }
        counts
    }

    /// Picks a pending task uniformly at random, or `None` when
    /// everything is done. The caller supplies the RNG so tests can
    /// seed it.
    pub fn suggest_random<G: Rng + ?Sized>(&self, rng: &mut G) -> Option<&Task> {
        let pending: Vec<&Task> = self.tasks.iter().filter(|t| !t.done).collect();
        pending.choose(rng).copied()
    }

    /// Writes the current list without mutating it (the explicit
    /// save button).
    pub fn save(&self) -> Result<(), StoreError> {
        self.repo.save(&self.tasks)
    }

    /// Replaces the in-memory list with whatever the store holds,
    /// discarding unsaved state (the explicit load button).
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.tasks = self.repo.load()?;
        Ok(())
    }
}
