use serde::{Deserialize, Serialize};

/// A checklist item owned by its parent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    /// A new, unchecked item with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
        }
    }
}

/// Checklist completion for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtaskProgress {
    pub completed: usize,
    pub total: usize,
}

impl SubtaskProgress {
    pub fn from_subtasks(subtasks: &[Subtask]) -> Self {
        Self {
            completed: subtasks.iter().filter(|s| s.completed).count(),
            total: subtasks.len(),
        }
    }

    /// Completion in `0.0..=1.0`; zero for an empty checklist.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
