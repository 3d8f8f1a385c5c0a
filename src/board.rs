//! In-memory task board.
//!
//! The board owns the tasks a front end has accepted. Extraction never touches
//! it. Ids are handed out in increasing order and are not reused after
//! removal.

use crate::ProcessedTask;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardEntry {
    pub id: TaskId,
    pub task: ProcessedTask,
    pub status: TaskStatus,
}

#[derive(Debug, Default, Clone)]
pub struct TaskBoard {
    next_id: u64,
    entries: BTreeMap<TaskId, BoardEntry>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: ProcessedTask) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.entries.insert(id, BoardEntry { id, task, status: TaskStatus::Pending });
        id
    }

    /// Add every task in order and return their ids.
    pub fn add_all(&mut self, tasks: impl IntoIterator<Item = ProcessedTask>) -> Vec<TaskId> {
        tasks.into_iter().map(|t| self.add(t)).collect()
    }

    /// Flip between completed and pending. Returns the new status, or `None`
    /// for an unknown id.
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<TaskStatus> {
        let entry = self.entries.get_mut(&id)?;
        entry.status = match entry.status {
            TaskStatus::Completed => TaskStatus::Pending,
            TaskStatus::Pending | TaskStatus::InProgress => TaskStatus::Completed,
        };
        Some(entry.status)
    }

    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Option<BoardEntry> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: TaskId) -> Option<&BoardEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BoardEntry> {
        self.entries.values()
    }

    /// Entries whose category id equals `category_id` (case-insensitive).
    pub fn by_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a BoardEntry> + 'a {
        self.iter().filter(move |e| e.task.category_id.eq_ignore_ascii_case(category_id))
    }

    pub fn with_status(&self, status: TaskStatus) -> impl Iterator<Item = &BoardEntry> {
        self.iter().filter(move |e| e.status == status)
    }

    /// Case-insensitive substring search on task text. An empty term matches
    /// everything.
    pub fn search(&self, term: &str) -> Vec<&BoardEntry> {
        let needle = term.to_lowercase();
        self.iter().filter(|e| e.task.text.to_lowercase().contains(&needle)).collect()
    }

    /// Number of entries per category id.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.iter() {
            *counts.entry(entry.task.category_id.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_tasks;

    fn board() -> (TaskBoard, Vec<TaskId>) {
        let mut board = TaskBoard::new();
        let ids = board.add_all(extract_tasks(
            "Plătește factura la lumină. Meeting with Ana tomorrow. Trimite raportul. Buy bread and milk",
            None,
        ));
        (board, ids)
    }

    #[test]
    fn ids_are_monotonic_and_not_reused() {
        let (mut board, ids) = board();
        assert_eq!(ids.len(), 4);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let last = *ids.last().unwrap();
        assert!(board.remove(last).is_some());
        let fresh = board.add(extract_tasks("Buy bread and milk", None).remove(0));
        assert!(fresh > last);
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn toggle_round_trips_and_ignores_unknown_ids() {
        let (mut board, ids) = board();
        assert_eq!(board.get(ids[0]).unwrap().status, TaskStatus::Pending);
        assert_eq!(board.toggle_complete(ids[0]), Some(TaskStatus::Completed));
        assert_eq!(board.toggle_complete(ids[0]), Some(TaskStatus::Pending));

        assert!(board.set_status(ids[1], TaskStatus::InProgress));
        assert_eq!(board.toggle_complete(ids[1]), Some(TaskStatus::Completed));
        assert_eq!(board.with_status(TaskStatus::Completed).count(), 1);

        board.remove(ids[2]);
        assert_eq!(board.toggle_complete(ids[2]), None);
        assert!(!board.set_status(ids[2], TaskStatus::Pending));
    }

    #[test]
    fn filters_by_category_and_counts() {
        let (board, _) = board();
        let finance: Vec<&str> = board.by_category("FINANCE").map(|e| e.task.text.as_str()).collect();
        assert_eq!(finance, vec!["Plătește factura la lumină"]);

        let counts = board.counts();
        assert_eq!(counts.get("finance"), Some(&1));
        assert_eq!(counts.get("schedule"), Some(&1));
        assert_eq!(counts.get("mail"), Some(&1));
        assert_eq!(counts.get("notes"), Some(&1));
    }

    #[test]
    fn search_is_case_insensitive() {
        let (board, _) = board();
        assert_eq!(board.search("ANA").len(), 1);
        assert_eq!(board.search("").len(), 4);
        assert!(board.search("dentist").is_empty());
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"in-progress\"");
        assert_eq!(TaskId(7).to_string(), "#7");
    }
}
