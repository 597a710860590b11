//! Task records shown by the front end and the in-memory list that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date_mask::format_date_input;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pendente",
            TaskStatus::Done => "Concluída",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub assignee: String,
    /// Deadline as masked `dd/mm/yyyy` text.
    pub deadline: String,
    pub status: TaskStatus,
    pub created_on: String,
    pub completed_on: Option<String>,
}

/// Fields of a task that can be edited. `None` leaves the field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Título e prazo são obrigatórios")]
    MissingRequired,
    #[error("Tarefa {0} não encontrada")]
    NotFound(TaskId),
}

/// In-memory task list, in creation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pending task. `today` is the creation date as `dd/mm/yyyy`.
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        assignee: &str,
        deadline: &str,
        today: &str,
    ) -> Result<&Task, TaskError> {
        let title = title.trim();
        let deadline = format_date_input(deadline);
        if title.is_empty() || deadline.is_empty() {
            return Err(TaskError::MissingRequired);
        }

        self.next_id += 1;
        let id = TaskId(self.next_id);
        tracing::info!(%id, title, "task created");
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            description: description.trim().to_string(),
            assignee: assignee.trim().to_string(),
            deadline,
            status: TaskStatus::Pending,
            created_on: today.to_string(),
            completed_on: None,
        });
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// All tasks, or only pending ones when `include_done` is false.
    pub fn list(&self, include_done: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| include_done || task.status != TaskStatus::Done)
            .collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Applies the given fields. Title and deadline get the same trimming,
    /// masking and required check as [`TaskList::create`].
    pub fn update(&mut self, id: TaskId, update: TaskUpdate) -> Result<&Task, TaskError> {
        let title = update.title.map(|title| title.trim().to_string());
        let deadline = update.deadline.map(|deadline| format_date_input(&deadline));
        let task = self.get_mut(id)?;
        if title.as_deref().is_some_and(str::is_empty)
            || deadline.as_deref().is_some_and(str::is_empty)
        {
            return Err(TaskError::MissingRequired);
        }

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description.trim().to_string();
        }
        if let Some(assignee) = update.assignee {
            task.assignee = assignee.trim().to_string();
        }
        if let Some(deadline) = deadline {
            task.deadline = deadline;
        }
        tracing::info!(%id, "task updated");
        Ok(&*task)
    }

    /// Marks a task done on `today`. Completing a done task keeps its original date.
    pub fn complete(&mut self, id: TaskId, today: &str) -> Result<&Task, TaskError> {
        let task = self.get_mut(id)?;
        if task.status != TaskStatus::Done {
            task.status = TaskStatus::Done;
            task.completed_on = Some(today.to_string());
            tracing::info!(%id, "task completed");
        }
        Ok(&*task)
    }

    pub fn delete(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let pos = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;
        tracing::info!(%id, "task deleted");
        Ok(self.tasks.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))
    }
}
