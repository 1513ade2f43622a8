use std::fmt;

use serde::{Deserialize, Serialize};

/// Category tag shown on a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskLabel {
    Feature,
    Bug,
    Issue,
    Task,
    #[default]
    Undefined,
}

impl TaskLabel {
    pub const ALL: &[TaskLabel] = &[
        TaskLabel::Feature,
        TaskLabel::Bug,
        TaskLabel::Issue,
        TaskLabel::Task,
        TaskLabel::Undefined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskLabel::Feature => "Feature",
            TaskLabel::Bug => "Bug",
            TaskLabel::Issue => "Issue",
            TaskLabel::Task => "Task",
            TaskLabel::Undefined => "Undefined",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "Feature" => Some(TaskLabel::Feature),
            "Bug" => Some(TaskLabel::Bug),
            "Issue" => Some(TaskLabel::Issue),
            "Task" => Some(TaskLabel::Task),
            "Undefined" => Some(TaskLabel::Undefined),
            _ => None,
        }
    }
}

impl fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
