//! Search and filter over a loaded board. Nothing here mutates the board.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::column::Column;
use crate::label::TaskLabel;
use crate::task::Task;

/// Assignee filter value matching tasks with no assignee.
pub const UNASSIGNED: &str = "unassigned";

/// Active filter criteria. Criteria combine with AND; the values inside a
/// list criterion combine with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Legacy single-assignee filter: exact assignee id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Assignee ids, or [`UNASSIGNED`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    /// Legacy single-label filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<TaskLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<TaskLabel>,
    /// Inclusive cutoff: only tasks due on or before this day pass.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::task::due_date::deserialize"
    )]
    pub due_date: Option<NaiveDate>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active criteria, for a filter badge.
    pub fn active_count(&self) -> usize {
        [
            self.assignee.is_some(),
            !self.assignees.is_empty(),
            self.label.is_some(),
            !self.labels.is_empty(),
            self.due_date.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if !self.assignees.is_empty() {
            let listed = task
                .assignee_id()
                .map(|id| self.assignees.iter().any(|a| a == id))
                .unwrap_or(false);
            let unassigned_ok =
                task.assignee.is_none() && self.assignees.iter().any(|a| a == UNASSIGNED);
            if !listed && !unassigned_ok {
                return false;
            }
        }

        if let Some(ref wanted) = self.assignee {
            if task.assignee_id() != Some(wanted.as_str()) {
                return false;
            }
        }

        if let Some(label) = self.label {
            if task.label != label {
                return false;
            }
        }

        if !self.labels.is_empty() && !self.labels.contains(&task.label) {
            return false;
        }

        if let Some(cutoff) = self.due_date {
            match task.due_date {
                Some(due) if due <= cutoff => {}
                _ => return false,
            }
        }

        true
    }
}

/// Short month names as the board shows them (en-GB, so September is `Sept`).
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Due date as the board displays it, e.g. `15 Oct 2025`.
pub fn display_due_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Case-insensitive substring search over title, description, assignee
/// name, label and displayed due date. An empty query matches everything.
pub fn matches_query(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(task.title.as_str())
        || contains(task.description.as_str())
        || task.assignee.as_ref().is_some_and(|a| contains(a.name.as_str()))
        || contains(task.label.as_str())
        || task
            .due_date
            .is_some_and(|d| contains(display_due_date(d).as_str()))
}

pub fn task_matches(task: &Task, query: &str, filters: &FilterSpec) -> bool {
    matches_query(task, query) && filters.matches(task)
}

/// A copy of `board` with each column's tasks narrowed to the matches.
/// Column order, metadata and empty columns are kept.
pub fn visible_board(board: &Board, query: &str, filters: &FilterSpec) -> Board {
    Board {
        id: board.id.clone(),
        title: board.title.clone(),
        columns: board
            .columns
            .iter()
            .map(|column| Column {
                id: column.id,
                title: column.title.clone(),
                color: column.color.clone(),
                tasks: column
                    .tasks
                    .iter()
                    .filter(|t| task_matches(t, query, filters))
                    .cloned()
                    .collect(),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub filtered: usize,
}

pub fn task_counts(board: &Board, query: &str, filters: &FilterSpec) -> TaskCounts {
    TaskCounts {
        total: board.task_count(),
        filtered: board
            .tasks()
            .filter(|t| task_matches(t, query, filters))
            .count(),
    }
}
