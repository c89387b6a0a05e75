use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::Task;

/// Tasks active on each day, keyed by `YYYY-MM-DD`.
pub type EventIndex = BTreeMap<String, Vec<Task>>;

pub fn iso_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Index every task under each day of its start..=due range. Tasks
/// without both dates are left out; so are ranges that end before they start.
pub fn build_event_index(tasks: &[Task]) -> EventIndex {
    let mut index = EventIndex::new();
    for task in tasks {
        let Some((start, due)) = task.date_range() else {
            continue;
        };
        let mut day = start;
        while day <= due {
            index.entry(iso_key(day)).or_default().push(task.clone());
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn task(id: &str, start: Option<&str>, due: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: None,
            start_date: start.map(str::to_string),
            due_date: due.map(str::to_string),
            priority: None,
            status: TaskStatus::Todo,
            index: None,
            project_id: None,
            employees: Vec::new(),
        }
    }

    #[test]
    fn test_range_across_month_boundary_is_inclusive() {
        let index = build_event_index(&[task("T1", Some("2024-03-30"), Some("2024-04-02"))]);
        let keys: Vec<&str> = index.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["2024-03-30", "2024-03-31", "2024-04-01", "2024-04-02"]);
    }

    #[test]
    fn test_task_missing_a_date_is_absent() {
        let index = build_event_index(&[
            task("A", Some("2024-05-01"), None),
            task("B", None, Some("2024-05-01")),
            task("C", None, None),
        ]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_reversed_range_contributes_nothing() {
        let index = build_event_index(&[task("R", Some("2024-05-03"), Some("2024-05-01"))]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_overlapping_tasks_keep_input_order() {
        let index = build_event_index(&[
            task("A", Some("2024-02-28"), Some("2024-03-01")),
            task("B", Some("2024-02-29"), Some("2024-02-29")),
        ]);

        let leap_day: Vec<&str> = index["2024-02-29"].iter().map(|t| t.id.as_str()).collect();
        assert_eq!(leap_day, vec!["A", "B"]);
        assert_eq!(index["2024-03-01"].len(), 1);
    }
}
