use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::employee::EmployeeBubble;
use crate::core::serde_utils::{id_string, opt_id_string};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Column label shown in the board header.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
        }
    }

    /// Wire key, also used as the column's `data-status` attribute.
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Done,
        ]
    }
}

/// Colour class for a task's priority, shared by calendar dots and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Danger,
    Warning,
    Success,
    Info,
}

impl BadgeKind {
    pub fn from_priority(priority: Option<i32>) -> Self {
        match priority {
            Some(3) => BadgeKind::Danger,
            Some(2) => BadgeKind::Warning,
            Some(1) => BadgeKind::Success,
            _ => BadgeKind::Info,
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            BadgeKind::Danger => "danger",
            BadgeKind::Warning => "warning",
            BadgeKind::Success => "success",
            BadgeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    // Kept as raw strings: a bad date only drops the task from the calendar.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
    pub status: TaskStatus,
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub employees: Vec<EmployeeBubble>,
}

impl Task {
    /// Inclusive date range, or `None` when either end is missing or malformed.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_iso_date(self.start_date.as_deref()?)?;
        let due = parse_iso_date(self.due_date.as_deref()?)?;
        Some((start, due))
    }

    pub fn badge_kind(&self) -> BadgeKind {
        BadgeKind::from_priority(self.priority)
    }

    /// Short card label such as `FLB-7`. Falls back to initials of the
    /// title-cased name when the server did not send one.
    pub fn display_index(&self) -> String {
        match &self.index {
            Some(index) if !index.is_empty() => index.clone(),
            _ => {
                let initials: String = self
                    .name
                    .split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .flat_map(char::to_uppercase)
                    .collect();
                format!("{}-{}", initials, self.id)
            }
        }
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(json: &str) -> Task {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_status_wire_keys_match_labels_order() {
        let keys: Vec<&str> = TaskStatus::all().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["todo", "in_progress", "review", "done"]);

        let parsed: TaskStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(parsed, TaskStatus::InProgress);
        assert!(serde_json::from_str::<TaskStatus>("\"archived\"").is_err());
    }

    #[test]
    fn test_minimal_task_uses_defaults() {
        let t = task(r#"{"id": 5, "name": "Write report", "status": "todo"}"#);
        assert_eq!(t.id, "5");
        assert!(t.description.is_none());
        assert!(t.employees.is_empty());
        assert!(t.date_range().is_none());
    }

    #[test]
    fn test_date_range_requires_both_valid_dates() {
        let ok = task(
            r#"{"id": "T1", "name": "a", "status": "todo",
                "start_date": "2024-03-30", "due_date": "2024-04-02"}"#,
        );
        let missing = task(r#"{"id": "T2", "name": "b", "status": "todo", "start_date": "2024-03-30"}"#);
        let malformed = task(
            r#"{"id": "T3", "name": "c", "status": "todo",
                "start_date": "2024-13-01", "due_date": "2024-04-02"}"#,
        );

        let (start, due) = ok.date_range().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
        assert_eq!(due, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        assert!(missing.date_range().is_none());
        assert!(malformed.date_range().is_none());
    }

    #[test]
    fn test_badge_kind_from_priority() {
        assert_eq!(BadgeKind::from_priority(Some(3)), BadgeKind::Danger);
        assert_eq!(BadgeKind::from_priority(Some(2)), BadgeKind::Warning);
        assert_eq!(BadgeKind::from_priority(Some(1)), BadgeKind::Success);
        assert_eq!(BadgeKind::from_priority(Some(0)), BadgeKind::Info);
        assert_eq!(BadgeKind::from_priority(None), BadgeKind::Info);
    }

    #[test]
    fn test_display_index_prefers_server_value() {
        let given = task(r#"{"id": 7, "name": "fix login bug", "status": "todo", "index": "FX-7"}"#);
        let derived = task(r#"{"id": 7, "name": "fix login bug", "status": "todo"}"#);

        assert_eq!(given.display_index(), "FX-7");
        assert_eq!(derived.display_index(), "FLB-7");
    }
}
