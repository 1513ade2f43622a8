use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::assignee::Assignee;
use crate::attachment::Attachment;
use crate::column::ColumnId;
use crate::error::BoardError;
use crate::label::TaskLabel;
use crate::subtask::{Subtask, SubtaskProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Unset => "",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Unset => "None",
            other => other.as_str(),
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            "" => Some(Priority::Unset),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default, deserialize_with = "due_date::deserialize")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub label: TaskLabel,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub column: ColumnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn from_draft(id: String, draft: CreateTask, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            assignee: draft.assignee,
            due_date: draft.due_date,
            label: draft.label,
            priority: draft.priority,
            subtasks: draft.subtasks,
            attachments: draft.attachments,
            column: draft.column,
            cover_image: draft.cover_image,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        validate_title(&self.title)
    }

    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.id.as_str())
    }

    pub fn subtask_progress(&self) -> SubtaskProgress {
        SubtaskProgress::from_subtasks(&self.subtasks)
    }

    /// Overwrite every field present in `update`. Does not touch `column`,
    /// `id` or the timestamps; placement is the board's job.
    pub(crate) fn merge(&mut self, update: &UpdateTask) {
        if let Some(ref title) = update.title {
            self.title = title.clone();
        }
        if let Some(ref description) = update.description {
            self.description = description.clone();
        }
        if let Some(ref assignee) = update.assignee {
            self.assignee = assignee.clone();
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(ref subtasks) = update.subtasks {
            self.subtasks = subtasks.clone();
        }
        if let Some(ref attachments) = update.attachments {
            self.attachments = attachments.clone();
        }
        if let Some(ref cover_image) = update.cover_image {
            self.cover_image = cover_image.clone();
        }
    }
}

/// Everything a caller supplies to create a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default, deserialize_with = "due_date::deserialize")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub label: TaskLabel,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub column: ColumnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl CreateTask {
    /// A bare draft with defaults for everything but title and column.
    pub fn new(title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            assignee: None,
            due_date: None,
            label: TaskLabel::default(),
            priority: Priority::default(),
            subtasks: Vec::new(),
            attachments: Vec::new(),
            column,
            cover_image: None,
        }
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        validate_title(&self.title)
    }
}

/// Partial update. `None` keeps the current value; for nullable fields
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub assignee: Option<Option<Assignee>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "due_date::deserialize_update"
    )]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<TaskLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Subtask>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnId>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub cover_image: Option<Option<String>>,
}

impl UpdateTask {
    pub fn move_to(column: ColumnId) -> Self {
        Self {
            column: Some(column),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        match self.title {
            Some(ref title) => validate_title(title),
            None => Ok(()),
        }
    }
}

fn validate_title(title: &str) -> Result<(), BoardError> {
    if title.trim().is_empty() {
        return Err(BoardError::Validation("task title must not be empty".into()));
    }
    Ok(())
}

// Present-but-null becomes `Some(None)`; absence is handled by `default`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) mod due_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de::Error, Deserialize, Deserializer};

    /// Accepts a plain `YYYY-MM-DD` date or any ISO-8601 datetime and keeps
    /// the calendar date.
    pub fn parse(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .ok()
            .map(|dt| dt.date())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid due date: {s}"))),
        }
    }

    pub fn deserialize_update<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<NaiveDate>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Some)
    }
}

pub use due_date::parse as parse_due_date;
