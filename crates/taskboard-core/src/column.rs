use std::fmt;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// The closed set of board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    Todo,
    Doing,
    Review,
    Done,
    Rework,
}

impl ColumnId {
    /// Board order, left to right.
    pub const ALL: &[ColumnId] = &[
        ColumnId::Todo,
        ColumnId::Doing,
        ColumnId::Review,
        ColumnId::Done,
        ColumnId::Rework,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::Doing => "doing",
            ColumnId::Review => "review",
            ColumnId::Done => "done",
            ColumnId::Rework => "rework",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnId::Todo => "To Do",
            ColumnId::Doing => "Doing",
            ColumnId::Review => "Review",
            ColumnId::Done => "Done",
            ColumnId::Rework => "Rework",
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            ColumnId::Todo => "#3880ff",
            ColumnId::Doing => "#ffce00",
            ColumnId::Review => "#ff6600",
            ColumnId::Done => "#2dd36f",
            ColumnId::Rework => "#eb445a",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(ColumnId::Todo),
            "doing" => Some(ColumnId::Doing),
            "review" => Some(ColumnId::Review),
            "done" => Some(ColumnId::Done),
            "rework" => Some(ColumnId::Rework),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// An empty column with its default title and colour.
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.display_name().to_string(),
            color: id.default_color().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}
