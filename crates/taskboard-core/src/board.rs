use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnId};
use crate::error::BoardError;
use crate::task::{CreateTask, Task, UpdateTask};

/// The single board: an ordered list of columns, each owning its tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// A board with every column present and no tasks.
    pub fn empty(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            columns: ColumnId::ALL.iter().map(|c| Column::new(*c)).collect(),
        }
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks().find(|t| t.id == task_id)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Check the structural invariants: unique column ids, unique task ids
    /// across the board, and every task's `column` naming its container.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(column.id) {
                return Err(BoardError::Validation(format!(
                    "duplicate column {}",
                    column.id.as_str()
                )));
            }
            for task in &column.tasks {
                if !task_ids.insert(task.id.as_str()) {
                    return Err(BoardError::Validation(format!("duplicate task id {}", task.id)));
                }
                if task.column != column.id {
                    return Err(BoardError::Validation(format!(
                        "task {} is stored in {} but claims {}",
                        task.id,
                        column.id.as_str(),
                        task.column.as_str()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Append a new task built from `draft` to the end of its column.
    pub fn create_task(&mut self, draft: CreateTask, now: DateTime<Utc>) -> Result<Task, BoardError> {
        draft.validate()?;
        if self.column(draft.column).is_none() {
            return Err(unknown_column(draft.column));
        }
        let id = self.fresh_task_id();
        let task = Task::from_draft(id, draft, now);
        let column = self
            .column_mut(task.column)
            .ok_or_else(|| unknown_column(task.column))?;
        column.tasks.push(task.clone());
        Ok(task)
    }

    /// Merge `update` onto the task with `task_id`.
    ///
    /// A task whose column changes is appended to the end of the target
    /// column; otherwise it keeps its position. `updated_at` never moves
    /// backwards, even if `now` is behind the stored stamp.
    pub fn update_task(
        &mut self,
        task_id: &str,
        update: &UpdateTask,
        now: DateTime<Utc>,
    ) -> Result<Task, BoardError> {
        update.validate()?;
        let (col_idx, task_idx) = self
            .locate(task_id)
            .ok_or_else(|| BoardError::NotFound(format!("task {task_id}")))?;

        let current = self.columns[col_idx].id;
        let target = update.column.unwrap_or(current);
        let target_idx = if target == current {
            col_idx
        } else {
            self.columns
                .iter()
                .position(|c| c.id == target)
                .ok_or_else(|| unknown_column(target))?
        };

        let mut task = self.columns[col_idx].tasks[task_idx].clone();
        task.merge(update);
        task.column = target;
        task.updated_at = now.max(task.updated_at);

        if target_idx == col_idx {
            self.columns[col_idx].tasks[task_idx] = task.clone();
        } else {
            self.columns[col_idx].tasks.remove(task_idx);
            self.columns[target_idx].tasks.push(task.clone());
        }
        Ok(task)
    }

    /// Remove the task with `task_id` from whichever column holds it.
    pub fn remove_task(&mut self, task_id: &str) -> Option<Task> {
        let (col_idx, task_idx) = self.locate(task_id)?;
        Some(self.columns[col_idx].tasks.remove(task_idx))
    }

    fn locate(&self, task_id: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, c)| c.position(task_id).map(|ti| (ci, ti)))
    }

    fn fresh_task_id(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if self.find_task(&id).is_none() {
                return id;
            }
        }
    }
}

fn unknown_column(id: ColumnId) -> BoardError {
    BoardError::Validation(format!("unknown column {}", id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignee::Assignee;
    use crate::subtask::Subtask;
    use crate::task::Priority;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
    }

    fn board_with(titles: &[(&str, ColumnId)]) -> (Board, Vec<Task>) {
        let mut board = Board::empty("b", "Board");
        let tasks = titles
            .iter()
            .map(|(title, col)| board.create_task(CreateTask::new(*title, *col), t0()).unwrap())
            .collect();
        (board, tasks)
    }

    fn titles_in(board: &Board, column: ColumnId) -> Vec<String> {
        board
            .column(column)
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    #[test]
    fn create_appends_and_stamps() {
        let (board, tasks) = board_with(&[("a", ColumnId::Todo), ("b", ColumnId::Todo)]);
        assert_eq!(titles_in(&board, ColumnId::Todo), vec!["a", "b"]);
        assert_eq!(tasks[0].created_at, t0());
        assert_eq!(tasks[0].updated_at, t0());
        assert_ne!(tasks[0].id, tasks[1].id);
        board.validate().unwrap();
    }

    #[test]
    fn create_rejects_blank_title_and_missing_column() {
        let mut board = Board::empty("b", "Board");
        let err = board.create_task(CreateTask::new("", ColumnId::Todo), t0()).unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));

        board.columns.retain(|c| c.id != ColumnId::Rework);
        let err = board
            .create_task(CreateTask::new("x", ColumnId::Rework), t0())
            .unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn many_creates_never_share_an_id() {
        let mut board = Board::empty("b", "Board");
        let mut ids = HashSet::new();
        for i in 0..500 {
            let task = board
                .create_task(CreateTask::new(format!("t{i}"), ColumnId::ALL[i % 5]), t0())
                .unwrap();
            assert!(ids.insert(task.id));
        }
        board.validate().unwrap();
    }

    #[test]
    fn update_in_place_keeps_position() {
        let (mut board, tasks) = board_with(&[
            ("a", ColumnId::Todo),
            ("b", ColumnId::Todo),
            ("c", ColumnId::Todo),
        ]);
        let later = t0() + Duration::minutes(5);
        let update = UpdateTask {
            title: Some("B".into()),
            column: Some(ColumnId::Todo),
            ..Default::default()
        };
        let updated = board.update_task(&tasks[1].id, &update, later).unwrap();
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.created_at, t0());
        assert_eq!(titles_in(&board, ColumnId::Todo), vec!["a", "B", "c"]);
    }

    #[test]
    fn column_change_appends_to_target() {
        let (mut board, tasks) = board_with(&[
            ("a", ColumnId::Todo),
            ("b", ColumnId::Todo),
            ("x", ColumnId::Done),
        ]);
        let moved = board
            .update_task(&tasks[0].id, &UpdateTask::move_to(ColumnId::Done), t0())
            .unwrap();
        assert_eq!(moved.column, ColumnId::Done);
        assert_eq!(titles_in(&board, ColumnId::Todo), vec!["b"]);
        assert_eq!(titles_in(&board, ColumnId::Done), vec!["x", "a"]);
        assert_eq!(board.task_count(), 3);
        board.validate().unwrap();
    }

    #[test]
    fn any_column_can_reach_any_other() {
        let (mut board, tasks) = board_with(&[("a", ColumnId::Done)]);
        let id = &tasks[0].id;
        for target in [ColumnId::Todo, ColumnId::Rework, ColumnId::Review, ColumnId::Doing, ColumnId::Done] {
            let moved = board.update_task(id, &UpdateTask::move_to(target), t0()).unwrap();
            assert_eq!(moved.column, target);
            assert_eq!(titles_in(&board, target), vec!["a"]);
            board.validate().unwrap();
        }
    }

    #[test]
    fn partial_update_preserves_other_fields() {
        let mut board = Board::empty("b", "Board");
        let mut draft = CreateTask::new("full", ColumnId::Review);
        draft.description = "desc".into();
        draft.assignee = Some(Assignee::new("1", "John Doe", "JD"));
        draft.subtasks = vec![Subtask::new("one"), Subtask::new("two")];
        let created = board.create_task(draft, t0()).unwrap();

        let later = t0() + Duration::hours(1);
        let update = UpdateTask {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let updated = board.update_task(&created.id, &update, later).unwrap();

        let mut expected = created.clone();
        expected.priority = Priority::High;
        expected.updated_at = later;
        assert_eq!(updated, expected);
    }

    #[test]
    fn updated_at_never_goes_backwards() {
        let (mut board, tasks) = board_with(&[("a", ColumnId::Todo)]);
        let earlier = t0() - Duration::days(1);
        let updated = board
            .update_task(&tasks[0].id, &UpdateTask::default(), earlier)
            .unwrap();
        assert_eq!(updated.updated_at, t0());
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let (mut board, _) = board_with(&[("a", ColumnId::Todo)]);
        let err = board
            .update_task("nope", &UpdateTask::default(), t0())
            .unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
    }

    #[test]
    fn move_to_missing_column_leaves_board_untouched() {
        let (mut board, tasks) = board_with(&[("a", ColumnId::Todo)]);
        board.columns.retain(|c| c.id != ColumnId::Done);
        let before = board.clone();
        let err = board
            .update_task(&tasks[0].id, &UpdateTask::move_to(ColumnId::Done), t0())
            .unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn remove_task_reports_presence() {
        let (mut board, tasks) = board_with(&[("a", ColumnId::Todo), ("b", ColumnId::Doing)]);
        assert!(board.remove_task(&tasks[1].id).is_some());
        assert!(board.remove_task(&tasks[1].id).is_none());
        assert_eq!(board.task_count(), 1);
    }

    #[test]
    fn validate_flags_misplaced_and_duplicate_tasks() {
        let (mut board, tasks) = board_with(&[("a", ColumnId::Todo)]);
        let mut stray = tasks[0].clone();
        board.column_mut(ColumnId::Doing).unwrap().tasks.push(stray.clone());
        assert!(board.validate().is_err());

        board.column_mut(ColumnId::Doing).unwrap().tasks.clear();
        stray.id = "other".into();
        board.column_mut(ColumnId::Doing).unwrap().tasks.push(stray);
        assert!(board.validate().is_err());
    }
}
