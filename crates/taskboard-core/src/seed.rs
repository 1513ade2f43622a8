//! Sample data used the first time a store is opened.

use chrono::{DateTime, NaiveDate, Utc};

use crate::assignee::Assignee;
use crate::attachment::Attachment;
use crate::board::Board;
use crate::column::ColumnId;
use crate::label::TaskLabel;
use crate::subtask::Subtask;
use crate::task::{Priority, Task};

pub const BOARD_ID: &str = "main-board";
pub const BOARD_TITLE: &str = "Task Management Board";

pub fn default_assignees() -> Vec<Assignee> {
    vec![
        Assignee::new("1", "John Doe", "JD"),
        Assignee::new("2", "Jane Smith", "JS"),
        Assignee::new("3", "Mike Johnson", "MJ"),
        Assignee::new("4", "Sarah Wilson", "SW"),
        Assignee::new("5", "David Brown", "DB"),
    ]
}

/// The five-column sample board, every task stamped with `now`.
pub fn default_board(now: DateTime<Utc>) -> Board {
    let people = default_assignees();
    let person = |id: &str| people.iter().find(|a| a.id == id).cloned();

    let seeds = vec![
        Seed {
            id: "1",
            title: "Setup project structure",
            description: "Initialize the basic project structure and components for the task management application",
            assignee: person("1"),
            due: (2025, 10, 15),
            label: TaskLabel::Feature,
            priority: Priority::High,
            subtasks: &[
                ("1-1", "Create components folder", true),
                ("1-2", "Setup routing", false),
                ("1-3", "Configure TypeScript", false),
            ],
            attachments: &[("1-1", "requirements.pdf", "PDF"), ("1-2", "mockup.figma", "Figma")],
            cover_image: Some("https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&h=120&fit=crop"),
            column: ColumnId::Todo,
        },
        Seed {
            id: "4",
            title: "Write unit tests",
            description: "Create comprehensive unit tests for all components and services",
            assignee: person("4"),
            due: (2025, 10, 25),
            label: TaskLabel::Issue,
            priority: Priority::Medium,
            subtasks: &[
                ("4-1", "Test TaskCard component", false),
                ("4-2", "Test TaskService", false),
            ],
            attachments: &[],
            cover_image: Some("https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400&h=120&fit=crop"),
            column: ColumnId::Todo,
        },
        Seed {
            id: "2",
            title: "Implement drag and drop",
            description: "Add drag and drop functionality for task cards",
            assignee: person("2"),
            due: (2025, 10, 20),
            label: TaskLabel::Feature,
            priority: Priority::Medium,
            subtasks: &[
                ("2-1", "Research libraries", true),
                ("2-2", "Implement basic drag", false),
                ("2-3", "Add drop zones", false),
            ],
            attachments: &[],
            cover_image: Some("https://images.unsplash.com/photo-1581291518857-4e27b48ff24e?w=400&h=120&fit=crop"),
            column: ColumnId::Doing,
        },
        Seed {
            id: "5",
            title: "Code review for authentication",
            description: "Review the authentication implementation and security measures",
            assignee: person("5"),
            due: (2025, 10, 12),
            label: TaskLabel::Bug,
            priority: Priority::High,
            subtasks: &[
                ("5-1", "Check security vulnerabilities", true),
                ("5-2", "Test edge cases", false),
                ("5-3", "Performance review", false),
            ],
            attachments: &[("5-1", "security-checklist.xlsx", "Excel")],
            cover_image: Some("https://images.unsplash.com/photo-1563206767-5b18f218e8de?w=400&h=120&fit=crop"),
            column: ColumnId::Review,
        },
        Seed {
            id: "3",
            title: "Design UI mockups",
            description: "Create initial UI design and wireframes",
            assignee: person("3"),
            due: (2025, 10, 5),
            label: TaskLabel::Issue,
            priority: Priority::Low,
            subtasks: &[
                ("3-1", "Create wireframes", true),
                ("3-2", "Design components", true),
            ],
            attachments: &[("3-1", "mockup.figma", "Figma"), ("3-2", "colors.png", "PNG")],
            cover_image: Some("https://images.unsplash.com/photo-1586281380349-632531db7ed4?w=400&h=120&fit=crop"),
            column: ColumnId::Done,
        },
        Seed {
            id: "6",
            title: "Fix responsive design issues",
            description: "Address mobile layout problems reported by QA team",
            assignee: person("2"),
            due: (2025, 10, 10),
            label: TaskLabel::Bug,
            priority: Priority::High,
            subtasks: &[
                ("6-1", "Fix tablet layout", false),
                ("6-2", "Improve mobile navigation", false),
            ],
            attachments: &[("6-1", "bug-report.pdf", "PDF"), ("6-2", "screenshots.zip", "ZIP")],
            cover_image: None,
            column: ColumnId::Rework,
        },
    ];

    let mut board = Board::empty(BOARD_ID, BOARD_TITLE);
    for seed in seeds {
        let task = seed.into_task(now);
        if let Some(column) = board.column_mut(task.column) {
            column.tasks.push(task);
        }
    }
    board
}

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    assignee: Option<Assignee>,
    due: (i32, u32, u32),
    label: TaskLabel,
    priority: Priority,
    subtasks: &'static [(&'static str, &'static str, bool)],
    attachments: &'static [(&'static str, &'static str, &'static str)],
    cover_image: Option<&'static str>,
    column: ColumnId,
}

impl Seed {
    fn into_task(self, now: DateTime<Utc>) -> Task {
        let (y, m, d) = self.due;
        Task {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            assignee: self.assignee,
            due_date: NaiveDate::from_ymd_opt(y, m, d),
            label: self.label,
            priority: self.priority,
            subtasks: self
                .subtasks
                .iter()
                .map(|(id, title, completed)| Subtask {
                    id: id.to_string(),
                    title: title.to_string(),
                    completed: *completed,
                })
                .collect(),
            attachments: self
                .attachments
                .iter()
                .map(|(id, name, kind)| Attachment {
                    id: id.to_string(),
                    name: name.to_string(),
                    kind: kind.to_string(),
                    size: None,
                })
                .collect(),
            column: self.column,
            cover_image: self.cover_image.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }
}
